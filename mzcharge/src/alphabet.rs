//! The residue alphabet, the set of one letter codes that are accepted in a sequence

use std::{collections::HashMap, sync::LazyLock};

use crate::{error::InvalidResidue, sequence::AminoAcid};

/// The alphabet of the 20 canonical amino acids, this is used by all free counting functions
pub static STANDARD_ALPHABET: LazyLock<ResidueAlphabet> =
    LazyLock::new(|| ResidueAlphabet::new(AminoAcid::CANONICAL_AMINO_ACIDS.iter().copied()));

/// A lookup from upper case one letter codes to the amino acid they represent.
/// Once built it is never mutated, so it can be shared between any number of threads.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResidueAlphabet {
    residues: HashMap<char, AminoAcid>,
}

impl ResidueAlphabet {
    /// Create an alphabet containing the given amino acids, keyed on their one letter code
    pub fn new(amino_acids: impl IntoIterator<Item = AminoAcid>) -> Self {
        Self {
            residues: amino_acids
                .into_iter()
                .map(|aa| (aa.one_letter_code(), aa))
                .collect(),
        }
    }

    /// Create an alphabet containing all IUPAC one letter codes, so on top of the canonical amino
    /// acids this also accepts the ambiguous B, J, Z, and X and the non-standard U and O.
    pub fn iupac() -> Self {
        Self::new(AminoAcid::IUPAC_AMINO_ACIDS.iter().copied())
    }

    /// Get the amino acid for this one letter code, this is case sensitive
    pub fn get(&self, residue: char) -> Option<AminoAcid> {
        self.residues.get(&residue).copied()
    }

    /// Check if this one letter code is part of the alphabet, this is case sensitive
    pub fn contains(&self, residue: char) -> bool {
        self.residues.contains_key(&residue)
    }

    /// The number of residues in this alphabet
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Check if the alphabet is empty, an empty alphabet only accepts empty sequences
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Iterate over all amino acids in this alphabet, in no particular order
    pub fn amino_acids(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.residues.values().copied()
    }

    /// Check that every character in the sequence is part of this alphabet. The sequence has to
    /// be normalised to upper case beforehand, lower case codes are rejected.
    /// # Errors
    /// An [`InvalidResidue`] for the first character that is not part of the alphabet.
    pub fn validate(&self, sequence: &str) -> Result<(), InvalidResidue> {
        for (index, residue) in sequence.char_indices() {
            if !self.contains(residue) {
                log::debug!(
                    "Rejected sequence, '{residue}' at index {index} is not a valid amino acid"
                );
                return Err(InvalidResidue::new(residue, index));
            }
        }
        Ok(())
    }
}

impl FromIterator<AminoAcid> for ResidueAlphabet {
    fn from_iter<T: IntoIterator<Item = AminoAcid>>(iter: T) -> Self {
        Self::new(iter)
    }
}
