#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod config;
pub mod format;
pub mod models;
pub mod session;
pub mod stats;

pub use api::{ApiError, ProfileApi, RentDeskClient};
pub use config::ClientConfig;
pub use session::{
    GuardDecision, NavTarget, SessionManager, SessionState, TokenStore, authorize,
};
pub use stats::{PaymentStatistics, StatisticsCache};
