pub mod dashboard;

pub use dashboard::EmployeeTipsPage;
