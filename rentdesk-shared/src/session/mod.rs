//! # Session
//!
//! Client-side authentication lifecycle: the persisted bearer token, the
//! resolver that turns it into a [`SessionState`], and the route guard
//! decision derived from that state.

mod error;
mod guard;
mod resolver;
mod state;
mod store;
mod token;

pub use error::AuthFailure;
pub use guard::{GuardDecision, NavTarget, authorize};
pub use resolver::SessionManager;
pub use state::SessionState;
pub use store::{MemoryTokenStore, StoreError, TOKEN_STORAGE_KEY, TokenStore};
pub use token::{TokenClaims, TokenDecodeError, decode_claims};

#[cfg(test)]
pub(crate) use token::tests::unsigned_token;
