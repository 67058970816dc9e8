//! Count the charged residues in protein sequences
//!
//! All counting functions take a sequence in any mix of upper and lower case. The sequence is
//! normalised to upper case, validated against the alphabet, and only then counted. If any
//! character is not part of the alphabet the whole count fails with an [`InvalidResidue`].
//!
//! ```rust
//! # use mzcharge::charge::{count_negative, count_positive};
//! assert_eq!(count_negative("EEDDK"), Ok(4));
//! assert_eq!(count_positive("eeddk"), Ok(1));
//! assert_eq!(count_negative("XYZ").unwrap_err().residue(), 'X');
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    alphabet::{ResidueAlphabet, STANDARD_ALPHABET},
    error::InvalidResidue,
    sequence::ChargeClass,
};

/// Check that every character in the sequence is one of the 20 canonical amino acids.
/// The sequence is expected to be in upper case already.
/// # Errors
/// An [`InvalidResidue`] for the first character that is not a canonical amino acid.
pub fn validate(sequence: &str) -> Result<(), InvalidResidue> {
    STANDARD_ALPHABET.validate(sequence)
}

/// Count the negatively charged residues (E, D) in a protein sequence.
/// # Errors
/// An [`InvalidResidue`] if any character is not one of the 20 canonical amino acids.
pub fn count_negative(sequence: &str) -> Result<usize, InvalidResidue> {
    STANDARD_ALPHABET.count_negative(sequence)
}

/// Count the positively charged residues (R, K, H) in a protein sequence.
/// # Errors
/// An [`InvalidResidue`] if any character is not one of the 20 canonical amino acids.
pub fn count_positive(sequence: &str) -> Result<usize, InvalidResidue> {
    STANDARD_ALPHABET.count_positive(sequence)
}

/// Count the residues of the given charge class in a protein sequence.
/// # Errors
/// An [`InvalidResidue`] if any character is not one of the 20 canonical amino acids.
pub fn count_charge_class(sequence: &str, class: ChargeClass) -> Result<usize, InvalidResidue> {
    STANDARD_ALPHABET.count_charge_class(sequence, class)
}

/// Count all charge classes in a protein sequence at once.
/// # Errors
/// An [`InvalidResidue`] if any character is not one of the 20 canonical amino acids.
pub fn charge_composition(sequence: &str) -> Result<ChargeComposition, InvalidResidue> {
    STANDARD_ALPHABET.charge_composition(sequence)
}

impl ResidueAlphabet {
    /// Count the negatively charged residues in a protein sequence, see [`count_negative`].
    /// # Errors
    /// An [`InvalidResidue`] if any character is not part of this alphabet.
    pub fn count_negative(&self, sequence: &str) -> Result<usize, InvalidResidue> {
        self.count_charge_class(sequence, ChargeClass::Negative)
    }

    /// Count the positively charged residues in a protein sequence, see [`count_positive`].
    /// # Errors
    /// An [`InvalidResidue`] if any character is not part of this alphabet.
    pub fn count_positive(&self, sequence: &str) -> Result<usize, InvalidResidue> {
        self.count_charge_class(sequence, ChargeClass::Positive)
    }

    /// Count the residues of the given charge class in a protein sequence.
    /// # Errors
    /// An [`InvalidResidue`] if any character is not part of this alphabet.
    pub fn count_charge_class(
        &self,
        sequence: &str,
        class: ChargeClass,
    ) -> Result<usize, InvalidResidue> {
        let sequence = self.normalise(sequence)?;
        Ok(sequence
            .chars()
            .filter(|residue| {
                self.get(*residue)
                    .is_some_and(|aa| aa.charge_class() == class)
            })
            .count())
    }

    /// Count all charge classes in a protein sequence at once.
    /// # Errors
    /// An [`InvalidResidue`] if any character is not part of this alphabet.
    pub fn charge_composition(&self, sequence: &str) -> Result<ChargeComposition, InvalidResidue> {
        let sequence = self.normalise(sequence)?;
        Ok(sequence
            .chars()
            .filter_map(|residue| self.get(residue))
            .fold(ChargeComposition::default(), |mut composition, aa| {
                match aa.charge_class() {
                    ChargeClass::Negative => composition.negative += 1,
                    ChargeClass::Positive => composition.positive += 1,
                    ChargeClass::Uncharged => composition.uncharged += 1,
                    ChargeClass::Unknown => composition.unknown += 1,
                }
                composition
            }))
    }

    /// Upper case the sequence and validate it. ASCII upper casing keeps all byte offsets intact,
    /// so the index of an [`InvalidResidue`] also points into the original sequence.
    fn normalise(&self, sequence: &str) -> Result<String, InvalidResidue> {
        let sequence = sequence.to_ascii_uppercase();
        self.validate(&sequence)?;
        Ok(sequence)
    }
}

/// The number of residues of each charge class in a sequence
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargeComposition {
    negative: usize,
    positive: usize,
    uncharged: usize,
    unknown: usize,
}

impl ChargeComposition {
    /// The number of negatively charged residues
    pub const fn negative(self) -> usize {
        self.negative
    }

    /// The number of positively charged residues
    pub const fn positive(self) -> usize {
        self.positive
    }

    /// The number of uncharged residues
    pub const fn uncharged(self) -> usize {
        self.uncharged
    }

    /// The number of ambiguous residues that could be charged or not
    pub const fn unknown(self) -> usize {
        self.unknown
    }

    /// The number of residues of the given class
    pub const fn get(self, class: ChargeClass) -> usize {
        match class {
            ChargeClass::Negative => self.negative,
            ChargeClass::Positive => self.positive,
            ChargeClass::Uncharged => self.uncharged,
            ChargeClass::Unknown => self.unknown,
        }
    }

    /// The total number of residues
    pub const fn total(self) -> usize {
        self.negative + self.positive + self.uncharged + self.unknown
    }

    /// The net side chain charge, the number of positive minus the number of negative residues.
    /// Unknown residues are not taken into account.
    #[expect(clippy::cast_possible_wrap)]
    pub const fn net_charge(self) -> isize {
        self.positive as isize - self.negative as isize
    }
}
