pub mod d410_merchant_tips;
pub mod d411_employee_tips;
pub mod sync;

pub use d410_merchant_tips::ui::MerchantTipsPage;
pub use d411_employee_tips::ui::EmployeeTipsPage;
