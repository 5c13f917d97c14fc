pub mod api_error;
pub mod created;
pub mod serde_ext;
