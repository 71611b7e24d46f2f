pub mod client;
pub mod endpoints;
pub mod lcu;
pub mod models;
