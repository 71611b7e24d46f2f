pub mod output;
pub mod reports;
