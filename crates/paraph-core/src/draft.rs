//! Wizard drafts: the in-memory state a document or template is assembled in
//!
//! A draft is owned by one wizard session. It starts empty, is mutated as
//! the user walks the steps, and is either discarded or handed to a request
//! builder. Nothing here touches the network.

use std::collections::BTreeMap;

use paraph_types::{GroupId, SignerIndex, SigningFlow, SigningMode, TemplateEntity, UserId};
use tracing::warn;

use crate::coords::{CoordUnit, PageDimensions};
use crate::error::BuildError;

/// A zone rect in the zone's declared unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A signature zone as placed in the editor overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureZone {
    pub page: u32,
    pub rect: Rect,
    pub unit: CoordUnit,
    /// Row the zone belongs to. May be unattached after a row is removed;
    /// builders skip unattached zones when pairing.
    pub owner: SignerIndex,
    pub label: Option<String>,
}

impl SignatureZone {
    /// Check every coordinate against the zone's declared unit range.
    pub fn check_bounds(&self, zone: usize) -> Result<(), BuildError> {
        let fields = [
            ("x", self.rect.x),
            ("y", self.rect.y),
            ("width", self.rect.width),
            ("height", self.rect.height),
        ];
        for (field, value) in fields {
            if !self.unit.contains(value) {
                return Err(BuildError::CoordinateOutOfRange {
                    zone,
                    field,
                    value,
                    unit: self.unit,
                });
            }
        }
        Ok(())
    }
}

/// A signer row on a document draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Signer {
    pub index: SignerIndex,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    /// Step number picked in the row's dropdown; sequential flow only.
    pub step: Option<u32>,
}

/// A role placeholder row on a template draft.
///
/// Templates carry no durable user ids; `(role, order)` is the row's
/// identity until the template is used.
#[derive(Debug, Clone, PartialEq)]
pub struct RolePlaceholder {
    pub index: SignerIndex,
    pub role: String,
    pub order: u32,
    pub description: Option<String>,
    pub color: String,
    pub step: Option<u32>,
}

impl RolePlaceholder {
    pub fn key(&self) -> RoleKey {
        RoleKey {
            role: self.role.clone(),
            order: self.order,
        }
    }
}

/// Compound identity of a role placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleKey {
    pub role: String,
    pub order: u32,
}

/// A declared signing step on a document draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SigningStep {
    pub order: u32,
    pub signers: Vec<SignerIndex>,
}

/// A declared signing step on a template draft, members named by role key.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSigningStep {
    pub order: u32,
    pub roles: Vec<RoleKey>,
}

/// The signing-related fields of a template draft, patched as one unit.
///
/// Steps and zones can only be derived together with the mode, flow and
/// placeholder set, so a partial update carries all of them or none.
#[derive(Debug, Clone)]
pub struct SigningSection {
    pub signing_mode: Option<SigningMode>,
    pub signing_flow: SigningFlow,
    pub placeholders: Vec<RolePlaceholder>,
    pub steps: Vec<TemplateSigningStep>,
    pub zones: Vec<SignatureZone>,
}

/// Wizard state for an ad-hoc document.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    pub title: String,
    pub description: Option<String>,
    pub signing_mode: Option<SigningMode>,
    pub signing_flow: SigningFlow,
    /// Populated once the upload has completed.
    pub file_url: Option<String>,
    pub signers: Vec<Signer>,
    pub steps: Vec<SigningStep>,
    pub zones: Vec<SignatureZone>,
    /// Rendered pixel dimensions per page, filled in as pages render.
    pub page_dimensions: BTreeMap<u32, PageDimensions>,
    /// Recipient selection for INDIVIDUAL mode.
    pub recipient_user_ids: Vec<UserId>,
    pub recipient_group: Option<GroupId>,
    next_row: usize,
}

impl DocumentDraft {
    /// Empty draft, as created when the wizard opens.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            signing_mode: None,
            signing_flow: SigningFlow::default(),
            file_url: None,
            signers: Vec::new(),
            steps: Vec::new(),
            zones: Vec::new(),
            page_dimensions: BTreeMap::new(),
            recipient_user_ids: Vec::new(),
            recipient_group: None,
            next_row: 0,
        }
    }

    /// Append a signer row and return the index zones use to reference it.
    ///
    /// Indices are never reused, so a zone left behind by a removed row can
    /// not silently reattach to a later one.
    pub fn add_signer(
        &mut self,
        user_id: UserId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> SignerIndex {
        let index = SignerIndex(self.next_row);
        self.next_row += 1;
        self.signers.push(Signer {
            index,
            user_id,
            name: name.into(),
            description: None,
            color: color.into(),
            step: None,
        });
        index
    }

    /// Remove a signer row. Its zones keep their owner reference and become
    /// unattached.
    pub fn remove_signer(&mut self, index: SignerIndex) {
        self.signers.retain(|signer| signer.index != index);
        for step in &mut self.steps {
            step.signers.retain(|member| *member != index);
        }
    }

    pub fn add_zone(&mut self, zone: SignatureZone) {
        self.zones.push(zone);
    }

    pub fn set_page_dimensions(&mut self, page: u32, dimensions: PageDimensions) {
        self.page_dimensions.insert(page, dimensions);
    }

    pub fn signer(&self, index: SignerIndex) -> Option<&Signer> {
        self.signers.iter().find(|signer| signer.index == index)
    }

    /// Rebuild the declared steps from each row's step number.
    ///
    /// Rows without a number land in the first step; declared numbers are
    /// compacted to 1..n so the result is strictly increasing with no gaps.
    pub fn rebuild_steps(&mut self) {
        let mut by_number: BTreeMap<u32, Vec<SignerIndex>> = BTreeMap::new();
        for signer in &self.signers {
            by_number
                .entry(signer.step.unwrap_or(1))
                .or_default()
                .push(signer.index);
        }
        self.steps = by_number
            .into_values()
            .enumerate()
            .map(|(position, signers)| SigningStep {
                order: position as u32 + 1,
                signers,
            })
            .collect();
    }
}

/// Wizard state for a reusable template.
#[derive(Debug, Clone)]
pub struct TemplateDraft {
    pub name: String,
    pub description: Option<String>,
    pub signing_mode: Option<SigningMode>,
    pub signing_flow: SigningFlow,
    pub file_url: Option<String>,
    pub placeholders: Vec<RolePlaceholder>,
    pub steps: Vec<TemplateSigningStep>,
    pub zones: Vec<SignatureZone>,
    next_row: usize,
}

impl TemplateDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            signing_mode: None,
            signing_flow: SigningFlow::default(),
            file_url: None,
            placeholders: Vec::new(),
            steps: Vec::new(),
            zones: Vec::new(),
            next_row: 0,
        }
    }

    /// Append a role placeholder row and return its index.
    pub fn add_placeholder(
        &mut self,
        role: impl Into<String>,
        order: u32,
        color: impl Into<String>,
    ) -> SignerIndex {
        let index = SignerIndex(self.next_row);
        self.next_row += 1;
        self.placeholders.push(RolePlaceholder {
            index,
            role: role.into(),
            order,
            description: None,
            color: color.into(),
            step: None,
        });
        index
    }

    /// Remove a placeholder row and drop its key from declared steps.
    pub fn remove_placeholder(&mut self, index: SignerIndex) {
        let removed = match self.placeholder(index) {
            Some(placeholder) => placeholder.key(),
            None => return,
        };
        self.placeholders.retain(|placeholder| placeholder.index != index);
        for step in &mut self.steps {
            step.roles.retain(|key| *key != removed);
        }
    }

    pub fn add_zone(&mut self, zone: SignatureZone) {
        self.zones.push(zone);
    }

    pub fn placeholder(&self, index: SignerIndex) -> Option<&RolePlaceholder> {
        self.placeholders
            .iter()
            .find(|placeholder| placeholder.index == index)
    }

    /// Rebuild the declared steps from each row's step number, as on
    /// document drafts.
    pub fn rebuild_steps(&mut self) {
        let mut by_number: BTreeMap<u32, Vec<RoleKey>> = BTreeMap::new();
        for placeholder in &self.placeholders {
            by_number
                .entry(placeholder.step.unwrap_or(1))
                .or_default()
                .push(placeholder.key());
        }
        self.steps = by_number
            .into_values()
            .enumerate()
            .map(|(position, roles)| TemplateSigningStep {
                order: position as u32 + 1,
                roles,
            })
            .collect();
    }

    /// The signing-related fields as one patchable unit.
    pub fn signing_section(&self) -> SigningSection {
        SigningSection {
            signing_mode: self.signing_mode,
            signing_flow: self.signing_flow,
            placeholders: self.placeholders.clone(),
            steps: self.steps.clone(),
            zones: self.zones.clone(),
        }
    }

    /// Prefill a draft from a stored template, for edit mode and for
    /// creating documents from the template.
    ///
    /// Entity zone order is preserved, so zone indices in the draft match
    /// the template's stored zone array. A zone whose role order matches no
    /// declared role is kept but left unattached.
    pub fn from_entity(entity: &TemplateEntity) -> Self {
        let mut draft = TemplateDraft::new(entity.name.clone());
        draft.description = entity.description.clone();
        draft.signing_mode = Some(entity.signing_mode);
        draft.signing_flow = entity.signing_flow;
        draft.file_url = Some(entity.file_url.clone());

        for role in &entity.roles {
            draft.add_placeholder(role.role.clone(), role.order, role.color.clone());
            if let Some(row) = draft.placeholders.last_mut() {
                row.description = role.description.clone();
            }
        }

        for (position, zone) in entity.zones.iter().enumerate() {
            let owner = match draft
                .placeholders
                .iter()
                .find(|placeholder| placeholder.order == zone.role_order)
            {
                Some(placeholder) => placeholder.index,
                None => {
                    warn!(
                        zone = position,
                        role_order = zone.role_order,
                        "template zone references an undeclared role; keeping it unattached"
                    );
                    let index = SignerIndex(draft.next_row);
                    draft.next_row += 1;
                    index
                }
            };
            draft.zones.push(SignatureZone {
                page: zone.page,
                rect: Rect {
                    x: zone.x,
                    y: zone.y,
                    width: zone.width,
                    height: zone.height,
                },
                unit: CoordUnit::Percent,
                owner,
                label: zone.label.clone(),
            });
        }

        for step in &entity.steps {
            let mut roles: Vec<RoleKey> = Vec::new();
            for &zone_index in &step.zone_indices {
                let owner = match draft.zones.get(zone_index) {
                    Some(zone) => zone.owner,
                    None => continue,
                };
                if let Some(placeholder) = draft.placeholder(owner) {
                    let key = placeholder.key();
                    if !roles.contains(&key) {
                        roles.push(key);
                    }
                }
            }
            draft.steps.push(TemplateSigningStep {
                order: step.step_order,
                roles,
            });
        }

        draft
    }
}

#[cfg(test)]
mod tests {
    use paraph_types::{TemplateRole, TemplateStep, TemplateZone};
    use pretty_assertions::assert_eq;

    use super::*;

    fn fraction_zone(owner: SignerIndex, x: f64) -> SignatureZone {
        SignatureZone {
            page: 1,
            rect: Rect {
                x,
                y: 0.2,
                width: 0.3,
                height: 0.05,
            },
            unit: CoordUnit::Fraction,
            owner,
            label: None,
        }
    }

    #[test]
    fn test_removed_row_index_is_never_reused() {
        let mut draft = DocumentDraft::new("NDA");
        let alice = draft.add_signer(UserId::new("usr-a"), "Alice", "#EF4444");
        let bob = draft.add_signer(UserId::new("usr-b"), "Bob", "#3B82F6");
        draft.remove_signer(alice);

        let carol = draft.add_signer(UserId::new("usr-c"), "Carol", "#10B981");
        assert_ne!(carol, bob);
        assert_ne!(carol, alice);
        assert_eq!(draft.signer(carol).map(|s| s.name.as_str()), Some("Carol"));
        assert_eq!(draft.signer(alice), None);
    }

    #[test]
    fn test_rebuild_steps_compacts_declared_numbers() {
        let mut draft = DocumentDraft::new("Lease");
        let a = draft.add_signer(UserId::new("usr-a"), "Alice", "#EF4444");
        let b = draft.add_signer(UserId::new("usr-b"), "Bob", "#3B82F6");
        let c = draft.add_signer(UserId::new("usr-c"), "Carol", "#10B981");
        draft.signers[0].step = Some(2);
        draft.signers[1].step = Some(5);
        // Carol's row has no number and lands in the first step

        draft.rebuild_steps();

        assert_eq!(
            draft.steps,
            vec![
                SigningStep { order: 1, signers: vec![c] },
                SigningStep { order: 2, signers: vec![a] },
                SigningStep { order: 3, signers: vec![b] },
            ]
        );
    }

    #[test]
    fn test_zone_bounds_follow_declared_unit() {
        let in_percent = SignatureZone {
            unit: CoordUnit::Percent,
            rect: Rect {
                x: 50.0,
                y: 20.0,
                width: 30.0,
                height: 5.0,
            },
            ..fraction_zone(SignerIndex(0), 0.0)
        };
        assert!(in_percent.check_bounds(0).is_ok());

        // 50 would be fine as a percent but the zone declares fractions
        let out_of_range = SignatureZone {
            rect: Rect {
                x: 50.0,
                y: 0.2,
                width: 0.3,
                height: 0.05,
            },
            ..fraction_zone(SignerIndex(0), 0.0)
        };
        let err = out_of_range.check_bounds(3).unwrap_err();
        assert!(matches!(
            err,
            BuildError::CoordinateOutOfRange { zone: 3, field: "x", .. }
        ));
    }

    #[test]
    fn test_remove_placeholder_drops_it_from_steps() {
        let mut draft = TemplateDraft::new("Offer letter");
        let tenant = draft.add_placeholder("Tenant", 1, "#EF4444");
        let landlord = draft.add_placeholder("Landlord", 2, "#3B82F6");
        draft.steps = vec![TemplateSigningStep {
            order: 1,
            roles: vec![
                RoleKey { role: "Tenant".to_string(), order: 1 },
                RoleKey { role: "Landlord".to_string(), order: 2 },
            ],
        }];

        draft.remove_placeholder(tenant);

        assert_eq!(draft.placeholders.len(), 1);
        assert_eq!(draft.placeholders[0].index, landlord);
        assert_eq!(
            draft.steps[0].roles,
            vec![RoleKey { role: "Landlord".to_string(), order: 2 }]
        );
    }

    fn lease_entity() -> TemplateEntity {
        TemplateEntity {
            id: "tpl-9".to_string(),
            name: "Lease".to_string(),
            description: Some("Annual lease".to_string()),
            file_url: "https://files.test/lease.pdf".to_string(),
            signing_mode: SigningMode::Shared,
            signing_flow: SigningFlow::Sequential,
            roles: vec![
                TemplateRole {
                    role: "Tenant".to_string(),
                    order: 1,
                    color: "#EF4444".to_string(),
                    description: None,
                },
                TemplateRole {
                    role: "Landlord".to_string(),
                    order: 2,
                    color: "#3B82F6".to_string(),
                    description: None,
                },
            ],
            zones: vec![
                TemplateZone {
                    page: 1,
                    x: 10.0,
                    y: 20.0,
                    width: 30.0,
                    height: 5.0,
                    label: Some("tenant signature".to_string()),
                    role_order: 1,
                },
                TemplateZone {
                    page: 2,
                    x: 40.0,
                    y: 60.0,
                    width: 25.0,
                    height: 5.0,
                    label: None,
                    role_order: 2,
                },
            ],
            steps: vec![
                TemplateStep {
                    step_order: 1,
                    signer_count: 1,
                    zone_indices: vec![0],
                },
                TemplateStep {
                    step_order: 2,
                    signer_count: 1,
                    zone_indices: vec![1],
                },
            ],
            created_at: "2026-03-01T09:30:00Z".parse().unwrap(),
            updated_at: "2026-03-02T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_from_entity_prefills_rows_zones_and_steps() {
        let draft = TemplateDraft::from_entity(&lease_entity());

        assert_eq!(draft.signing_mode, Some(SigningMode::Shared));
        assert_eq!(draft.signing_flow, SigningFlow::Sequential);
        assert_eq!(draft.file_url.as_deref(), Some("https://files.test/lease.pdf"));

        assert_eq!(draft.placeholders.len(), 2);
        assert_eq!(draft.placeholders[0].role, "Tenant");
        assert_eq!(draft.placeholders[0].index, SignerIndex(0));

        assert_eq!(draft.zones.len(), 2);
        assert_eq!(draft.zones[0].unit, CoordUnit::Percent);
        assert_eq!(draft.zones[0].owner, SignerIndex(0));
        assert_eq!(draft.zones[1].owner, SignerIndex(1));

        assert_eq!(
            draft.steps,
            vec![
                TemplateSigningStep {
                    order: 1,
                    roles: vec![RoleKey { role: "Tenant".to_string(), order: 1 }],
                },
                TemplateSigningStep {
                    order: 2,
                    roles: vec![RoleKey { role: "Landlord".to_string(), order: 2 }],
                },
            ]
        );
    }

    #[test]
    fn test_from_entity_keeps_zone_with_undeclared_role_unattached() {
        let mut entity = lease_entity();
        entity.zones[1].role_order = 9;

        let draft = TemplateDraft::from_entity(&entity);

        // Index positions must keep matching the stored zone array
        assert_eq!(draft.zones.len(), 2);
        assert_eq!(draft.placeholder(draft.zones[1].owner), None);
        // The unattached zone contributes no role to its step
        assert_eq!(draft.steps[1].roles, vec![]);
    }
}
