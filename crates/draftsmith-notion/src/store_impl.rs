use std::{future::Future, pin::Pin, sync::Arc};

use draftsmith_core::{
    error::StoreError,
    provider::RecordStore,
    record::{CreatedRecord, DraftRecord, RecordCount},
};

use crate::{
    NotionAdapter,
    api_v1::{CreatePageRequest, QueryDatabaseRequest},
};

impl RecordStore for NotionAdapter {
    fn count_records(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<RecordCount, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let response = self
                .client
                .query_database(&self.database_id, &QueryDatabaseRequest::default())
                .await?;

            Ok(RecordCount {
                returned: response.results.len(),
                has_more: response.has_more,
            })
        })
    }

    fn create_record(
        &self,
        record: DraftRecord,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedRecord, StoreError>> + Send + '_>> {
        let client = Arc::clone(&self.client);
        let request = CreatePageRequest::for_draft(self.database_id.clone(), &record);

        Box::pin(async move {
            let page = client.create_page(&request).await?;

            Ok(CreatedRecord {
                id: page.id,
                url: page.url,
            })
        })
    }
}
