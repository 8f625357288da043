//! Domain types for slab fire-resistance calculations.

mod aggregate;
mod material;
mod rating;

pub use aggregate::AggregateType;
pub use material::{
    ConcreteCurve, NormalWeightCondition, SemiLightweightCondition, StrengthCurve,
    StrengthMaterial,
};
pub use rating::{FireRating, Restraint};

/// Normalizes a user-supplied key: trimmed, lowercase, with `-` and spaces as `_`.
pub(crate) fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}
