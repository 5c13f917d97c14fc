pub mod mutations;
pub mod ui;
