mod create;
mod delete;

pub use create::CreateSecret;
pub use delete::DeleteSecret;
