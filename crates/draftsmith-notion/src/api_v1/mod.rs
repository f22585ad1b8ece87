mod block;
mod page;
mod query;
mod rich_text;

pub use block::*;
pub use page::*;
pub use query::*;
pub use rich_text::*;
