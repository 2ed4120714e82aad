/// Bucket requests
pub mod buckets;
/// Pool creation
mod create;
/// Pool deletion
mod delete;
/// Single pool lookup
mod get;
/// Pool listing
mod list;
/// Access key requests
pub mod secrets;

pub use create::CreatePool;
pub use delete::DeletePool;
pub use get::GetPool;
pub use list::ListPools;
