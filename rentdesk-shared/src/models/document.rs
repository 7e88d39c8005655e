use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Receipt,
    Lease,
    Inventory,
    #[serde(other)]
    Other,
}

impl DocumentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "RECEIPT",
            Self::Lease => "LEASE",
            Self::Inventory => "INVENTORY",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document generated by the backend (rent receipt, lease, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    #[serde(default)]
    pub rental_id: Option<EntityId>,
    #[serde(default)]
    pub payment_id: Option<EntityId>,
    pub document_type: DocumentType,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_from_backend_json() {
        let json = r#"{
            "id": "doc-9",
            "paymentId": 12,
            "documentType": "RECEIPT",
            "fileName": "receipt-2024-03.pdf",
            "createdAt": "2024-03-02T09:30:00Z"
        }"#;
        let document: Document = serde_json::from_str(json).unwrap();

        assert_eq!(document.document_type, DocumentType::Receipt);
        assert_eq!(document.payment_id, Some(EntityId::Numeric(12)));
        assert!(document.download_url.is_none());
        assert_eq!(document.document_type.to_string(), "RECEIPT");
    }
}
