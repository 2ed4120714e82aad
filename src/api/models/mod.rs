/// Buckets, access keys and the pools that hold them
pub mod pool;
/// Bucket and key policies
pub mod policy;
/// Epoch second timestamps
pub mod time;
/// User info
pub mod user;

pub use pool::{AccessKeyEntry, BucketEntry, PoolDescriptor};
pub use policy::{BucketPolicy, KeyPolicy};
pub use time::EpochTime;
pub use user::{UserInfo, API_VERSION};
