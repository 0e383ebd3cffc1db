use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Receipt,
    Report,
    Proof,
    Milestone,
    Audit,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Receipt => "receipt",
            DocumentType::Report => "report",
            DocumentType::Proof => "proof",
            DocumentType::Milestone => "milestone",
            DocumentType::Audit => "audit",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered document. The content lives in the content store under `hash`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub hash: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub campaign_id: String,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    /// Size in bytes
    pub size: u64,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

/// Metadata supplied with an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub campaign_id: String,
    pub uploaded_by: String,
}

impl NewDocument {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.campaign_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "campaignId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Persisted document registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub documents: Vec<Document>,
}
