use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Commercial,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Available,
    Rented,
    Maintenance,
}

/// A property managed by an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    /// Living area in square meters.
    #[serde(default)]
    pub surface: Option<f64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rent_amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub charges: Option<Decimal>,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    #[serde(default)]
    pub owner_id: Option<EntityId>,
}

impl Property {
    /// Single-line postal address.
    #[must_use]
    pub fn full_address(&self) -> String {
        let locality = [self.postal_code.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if locality.is_empty() {
            self.address.clone()
        } else {
            format!("{}, {}", self.address, locality)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_from_backend_json() {
        let json = r#"{
            "id": 1,
            "name": "Canal loft",
            "address": "12 quai de Jemmapes",
            "city": "Paris",
            "postalCode": "75010",
            "propertyType": "APARTMENT",
            "rentAmount": 1450,
            "status": "RENTED"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();

        assert_eq!(property.rent_amount, Decimal::from(1450));
        assert_eq!(property.charges, None);
        assert_eq!(property.status, Some(PropertyStatus::Rented));
        assert_eq!(property.full_address(), "12 quai de Jemmapes, 75010 Paris");
    }

    #[test]
    fn unknown_property_type_maps_to_other() {
        let kind: PropertyType = serde_json::from_str("\"PARKING\"").unwrap();
        assert_eq!(kind, PropertyType::Other);
    }
}
