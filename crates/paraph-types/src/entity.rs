//! Entities returned by the platform, plus the group and upload payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, UserId};
use crate::request::{
    DocumentStep, SigningFlow, SigningMode, TemplateRole, TemplateStep, TemplateZone, ZonePayload,
};

/// Lifecycle status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    InProgress,
    Completed,
    Declined,
    Expired,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "pending"),
            DocumentStatus::InProgress => write!(f, "in_progress"),
            DocumentStatus::Completed => write!(f, "completed"),
            DocumentStatus::Declined => write!(f, "declined"),
            DocumentStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A document as stored by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntity {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_url: String,
    pub signing_mode: SigningMode,
    pub signing_flow: SigningFlow,
    pub status: DocumentStatus,
    pub zones: Vec<ZonePayload>,
    pub steps: Vec<DocumentStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A template as stored by the platform. Zones keep their owning role's
/// declared order so the template can be prefilled for editing or use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEntity {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_url: String,
    pub signing_mode: SigningMode,
    pub signing_flow: SigningFlow,
    pub roles: Vec<TemplateRole>,
    pub zones: Vec<TemplateZone>,
    pub steps: Vec<TemplateStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reusable recipient group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerGroup {
    pub id: GroupId,
    pub name: String,
    pub member_ids: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a recipient group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    pub member_ids: Vec<UserId>,
}

/// Where to upload file bytes and the URL the file will live at afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    pub upload_url: String,
    pub file_url: String,
}
