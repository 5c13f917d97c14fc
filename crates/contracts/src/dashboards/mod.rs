pub mod d410_merchant_tips;
pub mod d411_employee_tips;
