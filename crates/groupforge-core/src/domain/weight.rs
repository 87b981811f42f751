//! Question weights.

/// Weight applied to questions without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Returns true iff `weight` is usable as a question weight: positive and finite.
pub fn is_valid_weight(weight: f64) -> bool {
    weight > 0.0 && weight.is_finite()
}
