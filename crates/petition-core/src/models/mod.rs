mod academic;
mod category;
mod claim;
mod record;
mod web_evidence;

pub use academic::AcademicEvidence;
pub use category::Category;
pub use claim::{Claim, ClaimType};
pub use record::{EvidenceRecord, ScoredEvidence};
pub use web_evidence::WebEvidenceItem;

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the type's default. Lookup services leave
/// fields they could not fill as `null` rather than omitting them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
