pub mod api_client;
pub mod api_context;
pub mod api_utils;
pub mod change_notifier;
pub mod date_utils;
pub mod error;
pub mod notice;
pub mod number_format;

#[cfg(test)]
pub mod testing;
