pub mod document;
pub mod errors;
pub mod ids;
pub mod payment;
pub mod property;
pub mod rental;
pub mod role;
pub mod tenant;
pub mod user;

use serde::{Deserialize, Serialize};

pub use document::{Document, DocumentType};
pub use errors::ErrorResponse;
pub use ids::EntityId;
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use property::{Property, PropertyStatus, PropertyType};
pub use rental::{Rental, RentalStatus};
pub use role::{Role, RoleClaim};
pub use tenant::Tenant;
pub use user::{LoginRequest, LoginResponse, Profile, ProfileResponse};

/// Collection payload returned by the list endpoints.
///
/// The backend answers either with a bare JSON array or with a paged
/// envelope whose items live under `content`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Plain(Vec<T>),
    Page { content: Vec<T> },
}

impl<T> Listing<T> {
    /// Unwrap the items regardless of the envelope shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Plain(items) | Self::Page { content: items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_accepts_plain_array() {
        let listing: Listing<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(listing.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn listing_accepts_paged_envelope() {
        let json = r#"{"content": [4, 5], "totalElements": 2, "number": 0}"#;
        let listing: Listing<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.into_items(), vec![4, 5]);
    }
}
