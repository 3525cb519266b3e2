//! Wire-format request objects for the documents/templates API
//!
//! Field names serialize in camelCase to match the platform contract.
//! Document zones are absolute pixels; template zones are percentages
//! rounded to two decimals.

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, UserId};

/// How recipients are bound to a document or template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigningMode {
    /// No fixed signer set; recipients are supplied separately.
    Individual,
    /// One declared signer set shares the document.
    Shared,
}

/// Ordering of signers during the signing ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigningFlow {
    /// Everyone signs within a single step.
    #[default]
    Parallel,
    /// Signers are partitioned into ordered steps.
    Sequential,
}

/// A document signature zone in absolute pixel units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePayload {
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A template signature zone: percentage units plus the declared order of
/// the role that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateZone {
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub role_order: u32,
}

/// One resolved (user, zone) pair inside a document step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerAssignment {
    pub user_id: UserId,
    pub zone_index: usize,
}

/// A document signing step with its resolved assignments.
///
/// INDIVIDUAL mode sends exactly one step with an empty signer list; the
/// platform reads that as "recipients supplied separately".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStep {
    pub step_order: u32,
    pub signers: Vec<SignerAssignment>,
}

/// Recipient selection accompanying an INDIVIDUAL-mode document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    pub user_ids: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

/// Create-document request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_url: String,
    pub signing_mode: SigningMode,
    pub signing_flow: SigningFlow,
    pub zones: Vec<ZonePayload>,
    pub steps: Vec<DocumentStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Recipients>,
}

/// A role placeholder as declared on a template.
///
/// `(role, order)` is the placeholder's identity; templates carry no
/// durable signer ids until they are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRole {
    pub role: String,
    pub order: u32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A template signing step: a signer count plus the zones the step covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStep {
    pub step_order: u32,
    pub signer_count: u32,
    pub zone_indices: Vec<usize>,
}

/// Create-template request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_url: String,
    pub signing_mode: SigningMode,
    pub signing_flow: SigningFlow,
    pub roles: Vec<TemplateRole>,
    pub zones: Vec<TemplateZone>,
    pub steps: Vec<TemplateStep>,
}

/// Partial template update. Absent fields stay absent from the JSON and are
/// left untouched by the platform; this is a patch, not an overwrite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_mode: Option<SigningMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_flow: Option<SigningFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<TemplateRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<TemplateZone>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<TemplateStep>>,
}

/// Create a document from a stored template. Zone indices refer to the
/// template's stored zone array, so no coordinates travel here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseTemplateRequest {
    pub template_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<DocumentStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Recipients>,
}
