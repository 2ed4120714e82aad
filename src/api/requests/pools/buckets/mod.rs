mod create;
mod delete;

pub use create::CreateBucket;
pub use delete::DeleteBucket;
