use std::{future::Future, pin::Pin};

use crate::{
    error::StoreError,
    record::{CreatedRecord, DraftRecord, RecordCount},
};

/// A document store that holds one record per produced draft.
///
/// Implementations perform exactly one request per call and never retry.
pub trait RecordStore: Send + Sync {
    /// Count the records already present. Stores that page their query
    /// results report the count of the first page and flag the truncation
    /// through [`RecordCount::has_more`].
    fn count_records(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<RecordCount, StoreError>> + Send + '_>>;

    /// Persist `record` and return its identifier.
    fn create_record(
        &self,
        record: DraftRecord,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedRecord, StoreError>> + Send + '_>>;
}
