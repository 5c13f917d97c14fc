pub mod dashboard;

pub use dashboard::MerchantTipsPage;
