use paraph_types::SignerIndex;
use thiserror::Error;

use crate::coords::CoordUnit;

/// Why a draft could not be turned into a request.
///
/// Precondition variants mean a wizard step was skipped and the user can
/// fix the draft; mapping variants mean the draft itself is inconsistent.
/// Either way the build fails whole, never producing a partial request.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No signing mode selected")]
    MissingSigningMode,

    #[error("No file URL; the upload has not completed")]
    MissingFileUrl,

    #[error("No page dimensions recorded; the document preview has not rendered")]
    MissingPageDimensions,

    #[error("No dimensions recorded for page {page}")]
    UnknownPage { page: u32 },

    #[error("Zone {zone}: {field} = {value} is outside the declared {unit} range")]
    CoordinateOutOfRange {
        zone: usize,
        field: &'static str,
        value: f64,
        unit: CoordUnit,
    },

    #[error("Zone {zone} belongs to row {owner}, which is not in the draft")]
    UnknownZoneOwner { zone: usize, owner: SignerIndex },

    #[error("Sequential flow declared without any signing steps")]
    MissingSigningSteps,

    #[error("Role \"{role}\" (order {order}) has no assigned user")]
    UnassignedRole { role: String, order: u32 },

    #[error("Role \"{role}\" (order {order}) is assigned more than once")]
    RoleAssignedTwice { role: String, order: u32 },
}
