//! Physicochemical properties of residues

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The charge carried by the side chain of a residue at physiological pH
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChargeClass {
    /// Acidic side chain (D, E)
    Negative,
    /// Basic side chain (R, K, H)
    Positive,
    /// Neutral side chain
    #[default]
    Uncharged,
    /// The residue is ambiguous and could be charged or not (B, Z, X)
    Unknown,
}

impl std::fmt::Display for ChargeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Negative => "negative",
                Self::Positive => "positive",
                Self::Uncharged => "uncharged",
                Self::Unknown => "unknown",
            }
        )
    }
}
