//! Document request builder
//!
//! Turns a completed `DocumentDraft` into the create-document payload.
//! Pure and synchronous: no I/O, idempotent over the draft snapshot, safe
//! to call speculatively while the wizard is open.

use paraph_types::{
    DocumentRequest, DocumentStep, Recipients, SigningFlow, SigningMode, ZonePayload,
};
use tracing::debug;

use crate::draft::DocumentDraft;
use crate::error::BuildError;
use crate::{coords, resolve};

/// Build the create-document request from a draft.
///
/// Preconditions fail before any conversion starts: a signing mode must be
/// selected, the upload must have produced a file URL, and at least one
/// page must have rendered dimensions.
pub fn build_document_request(draft: &DocumentDraft) -> Result<DocumentRequest, BuildError> {
    let signing_mode = draft.signing_mode.ok_or(BuildError::MissingSigningMode)?;
    let file_url = match draft.file_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(BuildError::MissingFileUrl),
    };
    if draft.page_dimensions.is_empty() {
        return Err(BuildError::MissingPageDimensions);
    }

    let zones = absolute_zones(draft)?;
    let (steps, recipients) = match signing_mode {
        SigningMode::Individual => {
            // One degenerate step with no signers: the API reads that as
            // "recipients supplied separately".
            let step = DocumentStep {
                step_order: 1,
                signers: Vec::new(),
            };
            let recipients = Recipients {
                user_ids: draft.recipient_user_ids.clone(),
                group_id: draft.recipient_group.clone(),
            };
            (vec![step], Some(recipients))
        }
        SigningMode::Shared => (shared_steps(draft)?, None),
    };

    debug!(
        zones = zones.len(),
        steps = steps.len(),
        "built document request"
    );

    Ok(DocumentRequest {
        title: draft.title.clone(),
        description: draft.description.clone(),
        file_url,
        signing_mode,
        signing_flow: draft.signing_flow,
        zones,
        steps,
        recipients,
    })
}

fn absolute_zones(draft: &DocumentDraft) -> Result<Vec<ZonePayload>, BuildError> {
    let mut zones = Vec::with_capacity(draft.zones.len());
    for (index, zone) in draft.zones.iter().enumerate() {
        zone.check_bounds(index)?;
        let dimensions = draft
            .page_dimensions
            .get(&zone.page)
            .ok_or(BuildError::UnknownPage { page: zone.page })?;
        zones.push(ZonePayload {
            page: zone.page,
            x: coords::to_absolute(zone.rect.x, zone.unit, dimensions.width),
            y: coords::to_absolute(zone.rect.y, zone.unit, dimensions.height),
            width: coords::to_absolute(zone.rect.width, zone.unit, dimensions.width),
            height: coords::to_absolute(zone.rect.height, zone.unit, dimensions.height),
            label: zone.label.clone(),
        });
    }
    Ok(zones)
}

fn shared_steps(draft: &DocumentDraft) -> Result<Vec<DocumentStep>, BuildError> {
    match draft.signing_flow {
        SigningFlow::Parallel => Ok(vec![DocumentStep {
            step_order: 1,
            signers: resolve::all_signer_pairs(&draft.signers, &draft.zones),
        }]),
        SigningFlow::Sequential => {
            if draft.steps.is_empty() {
                return Err(BuildError::MissingSigningSteps);
            }
            Ok(draft
                .steps
                .iter()
                .map(|step| DocumentStep {
                    step_order: step.order,
                    signers: resolve::step_signer_pairs(
                        &draft.signers,
                        &step.signers,
                        &draft.zones,
                    ),
                })
                .collect())
        }
    }
}
