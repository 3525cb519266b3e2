//! Creating a document from a stored template
//!
//! At use time the template's role placeholders get concrete users. The
//! output mirrors the document builder's step shape, but zone indices
//! refer to the template's stored zone array, so no coordinate conversion
//! happens here.

use paraph_types::{
    DocumentStep, GroupId, Recipients, SignerAssignment, SignerIndex, SigningFlow, SigningMode,
    UseTemplateRequest, UserId,
};
use tracing::debug;

use crate::draft::{RoleKey, TemplateDraft};
use crate::error::BuildError;
use crate::resolve;

/// One role-to-user binding chosen at use time.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleAssignment {
    pub role: RoleKey,
    pub user_id: UserId,
}

/// What the admin fills in when creating a document from a template.
#[derive(Debug, Clone)]
pub struct UseTemplate {
    pub template_id: String,
    pub title: String,
    pub description: Option<String>,
    pub assignments: Vec<RoleAssignment>,
    /// Recipient selection, read only for INDIVIDUAL templates.
    pub recipient_user_ids: Vec<UserId>,
    pub recipient_group: Option<GroupId>,
}

impl UseTemplate {
    pub fn new(template_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            title: title.into(),
            description: None,
            assignments: Vec::new(),
            recipient_user_ids: Vec::new(),
            recipient_group: None,
        }
    }

    pub fn assign(&mut self, role: RoleKey, user_id: UserId) {
        self.assignments.push(RoleAssignment { role, user_id });
    }
}

/// Resolve a prefilled template draft and the chosen users into the
/// use-template request.
///
/// Every declared placeholder must receive exactly one user; assignments
/// naming a role the template never declared are ignored.
pub fn build_use_template_request(
    draft: &TemplateDraft,
    usage: &UseTemplate,
) -> Result<UseTemplateRequest, BuildError> {
    let signing_mode = draft.signing_mode.ok_or(BuildError::MissingSigningMode)?;

    let (steps, recipients) = match signing_mode {
        SigningMode::Individual => {
            let step = DocumentStep {
                step_order: 1,
                signers: Vec::new(),
            };
            let recipients = Recipients {
                user_ids: usage.recipient_user_ids.clone(),
                group_id: usage.recipient_group.clone(),
            };
            (vec![step], Some(recipients))
        }
        SigningMode::Shared => (shared_steps(draft, &usage.assignments)?, None),
    };

    debug!(
        template = %usage.template_id,
        steps = steps.len(),
        "built use-template request"
    );

    Ok(UseTemplateRequest {
        template_id: usage.template_id.clone(),
        title: usage.title.clone(),
        description: usage.description.clone(),
        steps,
        recipients,
    })
}

fn shared_steps(
    draft: &TemplateDraft,
    assignments: &[RoleAssignment],
) -> Result<Vec<DocumentStep>, BuildError> {
    let assigned = verify_assignments(draft, assignments)?;
    match draft.signing_flow {
        SigningFlow::Parallel => Ok(vec![DocumentStep {
            step_order: 1,
            signers: pairs_for(draft, &assigned, None),
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
                    signers: pairs_for(draft, &assigned, Some(&step.roles)),
                })
                .collect())
        }
    }
}

/// Check every declared placeholder against the assignment list, in
/// declaration order.
fn verify_assignments(
    draft: &TemplateDraft,
    assignments: &[RoleAssignment],
) -> Result<Vec<(SignerIndex, UserId)>, BuildError> {
    let mut assigned = Vec::with_capacity(draft.placeholders.len());
    for placeholder in &draft.placeholders {
        let mut matches = assignments.iter().filter(|assignment| {
            assignment.role.role == placeholder.role && assignment.role.order == placeholder.order
        });
        let user_id = match matches.next() {
            Some(assignment) => assignment.user_id.clone(),
            None => {
                return Err(BuildError::UnassignedRole {
                    role: placeholder.role.clone(),
                    order: placeholder.order,
                })
            }
        };
        if matches.next().is_some() {
            return Err(BuildError::RoleAssignedTwice {
                role: placeholder.role.clone(),
                order: placeholder.order,
            });
        }
        assigned.push((placeholder.index, user_id));
    }
    Ok(assigned)
}

fn pairs_for(
    draft: &TemplateDraft,
    assigned: &[(SignerIndex, UserId)],
    members: Option<&[RoleKey]>,
) -> Vec<SignerAssignment> {
    let mut pairs = Vec::new();
    for (index, user_id) in assigned {
        if let Some(members) = members {
            let active = draft.placeholder(*index).map_or(false, |placeholder| {
                members
                    .iter()
                    .any(|key| key.role == placeholder.role && key.order == placeholder.order)
            });
            if !active {
                continue;
            }
        }
        for zone_index in resolve::zones_owned_by(&draft.zones, &[*index]) {
            pairs.push(SignerAssignment {
                user_id: user_id.clone(),
                zone_index,
            });
        }
    }
    pairs
}
