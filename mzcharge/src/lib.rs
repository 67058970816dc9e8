#![doc = include_str!("../README.md")]

pub mod alphabet;
/// Contains the validation and counting of charged residues in protein sequences.
pub mod charge;
pub mod error;
/// Contains all things related to residues, amongst others amino acids and their charge.
pub mod sequence;

/// A subset of the types and functions that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::alphabet::{ResidueAlphabet, STANDARD_ALPHABET};
    pub use crate::charge::{
        ChargeComposition, charge_composition, count_charge_class, count_negative, count_positive,
    };
    pub use crate::error::{InvalidResidue, ResidueErrorKind};
    pub use crate::sequence::{AminoAcid, ChargeClass};
}

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
