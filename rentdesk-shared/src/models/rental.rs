use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, Property, Tenant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Active,
    Pending,
    Terminated,
    Expired,
}

impl RentalStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Pending => "PENDING",
            Self::Terminated => "TERMINATED",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lease binding a tenant to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: EntityId,
    pub property_id: EntityId,
    pub tenant_id: EntityId,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_rent: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub charges: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub deposit: Option<Decimal>,
    /// Day of month the rent falls due.
    #[serde(default)]
    pub payment_day: Option<u8>,
    pub status: RentalStatus,
    /// Embedded property, when the endpoint expands it.
    #[serde(default)]
    pub property: Option<Property>,
    /// Embedded tenant, when the endpoint expands it.
    #[serde(default)]
    pub tenant: Option<Tenant>,
}

impl Rental {
    /// Rent plus charges due every month, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn monthly_total(&self) -> Decimal {
        self.monthly_rent
            .saturating_add(self.charges.unwrap_or_default())
    }

    /// Whether the lease covers `day`.
    #[must_use]
    pub fn is_running_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && self.end_date.is_none_or(|end| day <= end)
    }
}
