pub mod auth_page;

pub use auth_page::AuthPage;
