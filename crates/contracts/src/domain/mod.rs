pub mod a101_employee;
pub mod a102_dining_table;
