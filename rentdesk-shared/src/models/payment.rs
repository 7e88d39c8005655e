use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Settlement status of a rent payment.
///
/// Statuses the client does not know are preserved in [`PaymentStatus::Other`]
/// so they still count towards totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Late,
    Partial,
    Cancelled,
    Other(String),
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "PAID",
            Self::Pending => "PENDING",
            Self::Late => "LATE",
            Self::Partial => "PARTIAL",
            Self::Cancelled => "CANCELLED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PAID" => Self::Paid,
            "PENDING" => Self::Pending,
            "LATE" => Self::Late,
            "PARTIAL" => Self::Partial,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    BankTransfer,
    Check,
    Cash,
    Card,
    DirectDebit,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Check => "CHECK",
            Self::Cash => "CASH",
            Self::Card => "CARD",
            Self::DirectDebit => "DIRECT_DEBIT",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rent payment as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: EntityId,
    #[serde(default)]
    pub rental_id: Option<EntityId>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl Payment {
    /// Minimal payment record, mostly useful for fixtures and previews.
    #[must_use]
    pub fn new(id: impl Into<EntityId>, amount: Decimal, status: PaymentStatus) -> Self {
        Self {
            id: id.into(),
            rental_id: None,
            amount,
            due_date: None,
            payment_date: None,
            status,
            payment_method: None,
            reference: None,
        }
    }
}
