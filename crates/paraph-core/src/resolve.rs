//! Zone grouping and step partitioning
//!
//! Everything here is ordering-sensitive: grouped owners keep their order
//! of first appearance, zone indices keep zone-list order, and pairs keep
//! signer-declaration order. The request builders depend on those orders.

use paraph_types::{SignerAssignment, SignerIndex};

use crate::draft::{RoleKey, RolePlaceholder, SignatureZone, Signer};

/// Group zone indices by owning row, in order of first appearance.
///
/// Unattached zones get their own entry like any other owner; callers that
/// pair against declared rows simply never look those entries up.
pub fn zones_by_owner(zones: &[SignatureZone]) -> Vec<(SignerIndex, Vec<usize>)> {
    let mut grouped: Vec<(SignerIndex, Vec<usize>)> = Vec::new();
    for (index, zone) in zones.iter().enumerate() {
        match grouped.iter_mut().find(|(owner, _)| *owner == zone.owner) {
            Some((_, indices)) => indices.push(index),
            None => grouped.push((zone.owner, vec![index])),
        }
    }
    grouped
}

/// Zone indices owned by any of `owners`, in zone-list order.
pub fn zones_owned_by(zones: &[SignatureZone], owners: &[SignerIndex]) -> Vec<usize> {
    zones
        .iter()
        .enumerate()
        .filter(|(_, zone)| owners.contains(&zone.owner))
        .map(|(index, _)| index)
        .collect()
}

/// Zone indices owned by the placeholders named in `members`, in zone-list
/// order.
pub fn role_zone_indices(
    placeholders: &[RolePlaceholder],
    zones: &[SignatureZone],
    members: &[RoleKey],
) -> Vec<usize> {
    let owners: Vec<SignerIndex> = placeholders
        .iter()
        .filter(|placeholder| {
            members
                .iter()
                .any(|key| key.role == placeholder.role && key.order == placeholder.order)
        })
        .map(|placeholder| placeholder.index)
        .collect();
    zones_owned_by(zones, &owners)
}

/// (userId, zoneIndex) pairs for every declared signer, in declaration
/// order, then zone-list order within one signer. Zones without a declared
/// owner contribute nothing.
pub fn all_signer_pairs(signers: &[Signer], zones: &[SignatureZone]) -> Vec<SignerAssignment> {
    let grouped = zones_by_owner(zones);
    pairs_for(signers.iter(), &grouped)
}

/// Pairs restricted to the signers active in one step.
pub fn step_signer_pairs(
    signers: &[Signer],
    members: &[SignerIndex],
    zones: &[SignatureZone],
) -> Vec<SignerAssignment> {
    let grouped = zones_by_owner(zones);
    pairs_for(
        signers.iter().filter(|signer| members.contains(&signer.index)),
        &grouped,
    )
}

fn pairs_for<'a>(
    signers: impl Iterator<Item = &'a Signer>,
    grouped: &[(SignerIndex, Vec<usize>)],
) -> Vec<SignerAssignment> {
    let mut pairs = Vec::new();
    for signer in signers {
        if let Some((_, indices)) = grouped.iter().find(|(owner, _)| *owner == signer.index) {
            for &zone_index in indices {
                pairs.push(SignerAssignment {
                    user_id: signer.user_id.clone(),
                    zone_index,
                });
            }
        }
    }
    pairs
}
