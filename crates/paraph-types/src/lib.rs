//! Shared identifier and wire-format types for the Paraph workspace

pub mod entity;
pub mod ids;
pub mod request;

pub use entity::{
    CreateGroupRequest, DocumentEntity, DocumentStatus, SignerGroup, TemplateEntity, UploadTarget,
};
pub use ids::{GroupId, SignerIndex, UserId};
pub use request::{
    DocumentRequest, DocumentStep, Recipients, SignerAssignment, SigningFlow, SigningMode,
    TemplateRequest, TemplateRole, TemplateStep, TemplateUpdateRequest, TemplateZone,
    UseTemplateRequest, ZonePayload,
};
