//! Request Builder core for the Paraph admin wizard
//!
//! This crate turns in-memory wizard state (a document or template draft)
//! into the wire-format request the signing platform accepts. Everything
//! is pure and synchronous; `paraph-client` does the I/O.
//!
//! The pipeline, leaves first:
//! - `coords`: relative zone coordinates to absolute pixels or rounded
//!   percentages
//! - `resolve`: zone grouping by owner and partitioning across steps
//! - `document` / `template`: the two request builder variants, plus the
//!   partial-update builder for templates
//! - `usage`: resolving role placeholders to users when a template is used

pub mod coords;
pub mod document;
pub mod draft;
pub mod error;
pub mod resolve;
pub mod template;
pub mod usage;

pub use coords::{round2, to_absolute, to_percent, CoordUnit, PageDimensions};
pub use document::build_document_request;
pub use draft::{
    DocumentDraft, Rect, RoleKey, RolePlaceholder, SignatureZone, Signer, SigningSection,
    SigningStep, TemplateDraft, TemplateSigningStep,
};
pub use error::BuildError;
pub use template::{build_template_request, build_template_update, TemplatePatch};
pub use usage::{build_use_template_request, RoleAssignment, UseTemplate};
