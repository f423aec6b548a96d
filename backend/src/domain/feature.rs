//! Named numeric features attached to file pairs.

/// A named numeric weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name.
    pub name: String,
    /// Feature weight.
    pub weight: f64,
}
