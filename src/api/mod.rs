/// Our API client
pub mod client;
/// Error
pub mod error;
/// Pools, buckets, access keys and the user
pub mod models;
/// Our API request implementation
pub mod requests;
/// Response envelope and payloads
pub mod response;
