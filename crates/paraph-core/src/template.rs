//! Template request builders: create and partial update
//!
//! Templates are user-agnostic, so steps carry a signer count and zone
//! index list instead of resolved identities, and zones stay in percent
//! units with the owning role's declared order attached.

use paraph_types::{
    SigningFlow, SigningMode, TemplateRequest, TemplateRole, TemplateStep, TemplateUpdateRequest,
    TemplateZone,
};
use tracing::{debug, warn};

use crate::draft::{
    RolePlaceholder, SignatureZone, SigningSection, TemplateDraft, TemplateSigningStep,
};
use crate::error::BuildError;
use crate::{coords, resolve};

/// Fields of a template edit. Only present fields reach the API; the
/// signing section travels as one unit because steps and zones can only
/// be derived together.
#[derive(Debug, Clone, Default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub signing: Option<SigningSection>,
}

/// Build the create-template request from a draft.
pub fn build_template_request(draft: &TemplateDraft) -> Result<TemplateRequest, BuildError> {
    let signing_mode = draft.signing_mode.ok_or(BuildError::MissingSigningMode)?;
    let file_url = match draft.file_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(BuildError::MissingFileUrl),
    };

    let zones = percent_zones(&draft.placeholders, &draft.zones)?;
    let steps = template_steps(
        &draft.placeholders,
        &draft.steps,
        &draft.zones,
        signing_mode,
        draft.signing_flow,
    )?;

    debug!(
        zones = zones.len(),
        steps = steps.len(),
        "built template request"
    );

    Ok(TemplateRequest {
        name: draft.name.clone(),
        description: draft.description.clone(),
        file_url,
        signing_mode,
        signing_flow: draft.signing_flow,
        roles: declared_roles(&draft.placeholders),
        zones,
        steps,
    })
}

/// Build a partial update. Absent patch fields stay absent from the
/// output, so the platform leaves them untouched.
pub fn build_template_update(patch: &TemplatePatch) -> Result<TemplateUpdateRequest, BuildError> {
    let mut update = TemplateUpdateRequest {
        name: patch.name.clone(),
        description: patch.description.clone(),
        ..Default::default()
    };

    if let Some(url) = patch.file_url.as_deref() {
        if url.is_empty() {
            return Err(BuildError::MissingFileUrl);
        }
        update.file_url = Some(url.to_string());
    }

    if let Some(signing) = &patch.signing {
        let signing_mode = signing.signing_mode.ok_or(BuildError::MissingSigningMode)?;
        update.signing_mode = Some(signing_mode);
        update.signing_flow = Some(signing.signing_flow);
        update.roles = Some(declared_roles(&signing.placeholders));
        update.zones = Some(percent_zones(&signing.placeholders, &signing.zones)?);
        update.steps = Some(template_steps(
            &signing.placeholders,
            &signing.steps,
            &signing.zones,
            signing_mode,
            signing.signing_flow,
        )?);
    }

    Ok(update)
}

fn declared_roles(placeholders: &[RolePlaceholder]) -> Vec<TemplateRole> {
    placeholders
        .iter()
        .map(|placeholder| TemplateRole {
            role: placeholder.role.clone(),
            order: placeholder.order,
            color: placeholder.color.clone(),
            description: placeholder.description.clone(),
        })
        .collect()
}

fn percent_zones(
    placeholders: &[RolePlaceholder],
    zones: &[SignatureZone],
) -> Result<Vec<TemplateZone>, BuildError> {
    let mut converted = Vec::with_capacity(zones.len());
    for (index, zone) in zones.iter().enumerate() {
        zone.check_bounds(index)?;
        // The wire zone names its owner by role order, so an unattached
        // zone cannot be serialized at all.
        let owner = placeholders
            .iter()
            .find(|placeholder| placeholder.index == zone.owner)
            .ok_or(BuildError::UnknownZoneOwner {
                zone: index,
                owner: zone.owner,
            })?;
        converted.push(TemplateZone {
            page: zone.page,
            x: coords::to_percent(zone.rect.x, zone.unit),
            y: coords::to_percent(zone.rect.y, zone.unit),
            width: coords::to_percent(zone.rect.width, zone.unit),
            height: coords::to_percent(zone.rect.height, zone.unit),
            label: zone.label.clone(),
            role_order: owner.order,
        });
    }
    Ok(converted)
}

fn template_steps(
    placeholders: &[RolePlaceholder],
    declared: &[TemplateSigningStep],
    zones: &[SignatureZone],
    signing_mode: SigningMode,
    signing_flow: SigningFlow,
) -> Result<Vec<TemplateStep>, BuildError> {
    let all_zones: Vec<usize> = (0..zones.len()).collect();
    match (signing_mode, signing_flow) {
        (SigningMode::Individual, _) => Ok(vec![TemplateStep {
            step_order: 1,
            signer_count: 1,
            zone_indices: all_zones,
        }]),
        (SigningMode::Shared, SigningFlow::Parallel) => Ok(vec![TemplateStep {
            step_order: 1,
            signer_count: placeholders.len() as u32,
            zone_indices: all_zones,
        }]),
        (SigningMode::Shared, SigningFlow::Sequential) => {
            if declared.is_empty() {
                return Err(BuildError::MissingSigningSteps);
            }
            let mut steps = Vec::with_capacity(declared.len());
            for step in declared {
                let mut zone_indices =
                    resolve::role_zone_indices(placeholders, zones, &step.roles);
                if zone_indices.is_empty() && !zones.is_empty() {
                    // A step matching no zones covers every zone, not none
                    warn!(
                        step = step.order,
                        "step roles match no zones; attaching all zone indices"
                    );
                    zone_indices = all_zones.clone();
                }
                steps.push(TemplateStep {
                    step_order: step.order,
                    signer_count: step.roles.len() as u32,
                    zone_indices,
                });
            }
            Ok(steps)
        }
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::coords::CoordUnit;
    use crate::draft::{Rect, RoleKey, SignatureZone};

    /// One declared step per role; zones assigned by the `owners` vector.
    fn sequential_template(role_count: usize, owners: Vec<usize>) -> TemplateDraft {
        let mut draft = TemplateDraft::new("Generated");
        draft.signing_mode = Some(SigningMode::Shared);
        draft.signing_flow = SigningFlow::Sequential;
        draft.file_url = Some("https://files.test/generated.pdf".to_string());
        for i in 0..role_count {
            draft.add_placeholder(format!("Role {}", i), i as u32 + 1, "#000000");
            draft.steps.push(TemplateSigningStep {
                order: i as u32 + 1,
                roles: vec![RoleKey {
                    role: format!("Role {}", i),
                    order: i as u32 + 1,
                }],
            });
        }
        for owner in owners {
            let index = draft.placeholders[owner].index;
            draft.add_zone(SignatureZone {
                page: 1,
                rect: Rect {
                    x: 10.0,
                    y: 10.0,
                    width: 20.0,
                    height: 5.0,
                },
                unit: CoordUnit::Percent,
                owner: index,
                label: None,
            });
        }
        draft
    }

    proptest! {
        /// Property: no sequential step ever goes out empty while the
        /// template has zones, and every index points into the zone array
        #[test]
        fn sequential_steps_never_go_out_empty(
            role_count in 1usize..4,
            owners_seed in proptest::collection::vec(0usize..4, 1..8),
        ) {
            let owners: Vec<usize> = owners_seed.iter().map(|o| o % role_count).collect();
            let zone_count = owners.len();
            let draft = sequential_template(role_count, owners);
            let request = build_template_request(&draft).unwrap();

            prop_assert_eq!(request.steps.len(), role_count);
            for step in &request.steps {
                prop_assert!(!step.zone_indices.is_empty());
                for &index in &step.zone_indices {
                    prop_assert!(index < zone_count);
                }
            }
        }
    }
}
