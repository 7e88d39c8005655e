pub mod config;
pub mod payments;
pub mod session;
