//! Module used to define the [`AminoAcid`] and the metadata known for each residue

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sequence::ChargeClass;

/// An amino acid, alongside the standard ones some [ambiguous (B/J/Z/X) and non-standard (U/O)](https://www.insdc.org/submitting-standards/feature-table/#7.4.3) are included.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AminoAcid {
    /// Ala, A
    #[default]
    Alanine = 0,
    /// Arg, R
    Arginine,
    /// Asn, N
    Asparagine,
    /// Asp, D
    AsparticAcid,
    /// Cys, C
    Cysteine,
    /// Gln, Q
    Glutamine,
    /// Glu, E
    GlutamicAcid,
    /// Gly, G
    Glycine,
    /// His, H
    Histidine,
    /// Ile, I
    Isoleucine,
    /// Leu, L
    Leucine,
    /// Lys, K
    Lysine,
    /// Met, M
    Methionine,
    /// Phe, F
    Phenylalanine,
    /// Pro, P
    Proline,
    /// Ser, S
    Serine,
    /// Thr, T
    Threonine,
    /// Trp, W
    Tryptophan,
    /// Tyr, Y
    Tyrosine,
    /// Val, V
    Valine,
    /// Asx, B
    AmbiguousAsparagine,
    /// Xle, J
    AmbiguousLeucine,
    /// Glx, Z
    AmbiguousGlutamine,
    /// Sec, U
    Selenocysteine,
    /// Pyl, O
    Pyrrolysine,
    /// Xxx, X
    Unknown,
}

impl AminoAcid {
    /// The total number of amino acids
    pub const TOTAL_NUMBER: usize = Self::Unknown as usize + 1;

    /// All 20 canonical amino acids
    pub const CANONICAL_AMINO_ACIDS: &'static [Self] = &[
        Self::Glycine,
        Self::Alanine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::Glutamine,
        Self::GlutamicAcid,
        Self::Histidine,
        Self::Leucine,
        Self::Isoleucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
    ];

    /// All amino acids with an IUPAC one letter code (including B/J/Z/U/O and X)
    pub const IUPAC_AMINO_ACIDS: &'static [Self] = &[
        Self::Alanine,
        Self::AmbiguousAsparagine,
        Self::AmbiguousGlutamine,
        Self::AmbiguousLeucine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::GlutamicAcid,
        Self::Glutamine,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Leucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Pyrrolysine,
        Self::Selenocysteine,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
        Self::Unknown,
    ];

    /// Get the single letter representation of the amino acid, this is always upper case
    pub const fn one_letter_code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::AmbiguousAsparagine => 'B',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::AmbiguousLeucine => 'J',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Pyrrolysine => 'O',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Selenocysteine => 'U',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Unknown => 'X',
            Self::Tyrosine => 'Y',
            Self::AmbiguousGlutamine => 'Z',
        }
    }

    /// Get the 3 letter code for the amino acid
    pub const fn three_letter_code(self) -> &'static str {
        match self {
            Self::Alanine => "Ala",
            Self::AmbiguousAsparagine => "Asx",
            Self::Cysteine => "Cys",
            Self::AsparticAcid => "Asp",
            Self::GlutamicAcid => "Glu",
            Self::Phenylalanine => "Phe",
            Self::Glycine => "Gly",
            Self::Histidine => "His",
            Self::Isoleucine => "Ile",
            Self::AmbiguousLeucine => "Xle",
            Self::Lysine => "Lys",
            Self::Leucine => "Leu",
            Self::Methionine => "Met",
            Self::Asparagine => "Asn",
            Self::Pyrrolysine => "Pyl",
            Self::Proline => "Pro",
            Self::Glutamine => "Gln",
            Self::Arginine => "Arg",
            Self::Serine => "Ser",
            Self::Threonine => "Thr",
            Self::Selenocysteine => "Sec",
            Self::Valine => "Val",
            Self::Tryptophan => "Trp",
            Self::Unknown => "Xaa",
            Self::Tyrosine => "Tyr",
            Self::AmbiguousGlutamine => "Glx",
        }
    }

    /// Get the full name for the amino acid
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alanine => "Alanine",
            Self::AmbiguousAsparagine => "Asparagine or aspartic acid",
            Self::Cysteine => "Cysteine",
            Self::AsparticAcid => "Aspartic acid",
            Self::GlutamicAcid => "Glutamic acid",
            Self::Phenylalanine => "Phenylalanine",
            Self::Glycine => "Glycine",
            Self::Histidine => "Histidine",
            Self::Isoleucine => "Isoleucine",
            Self::AmbiguousLeucine => "Leucine or isoleucine",
            Self::Lysine => "Lysine",
            Self::Leucine => "Leucine",
            Self::Methionine => "Methionine",
            Self::Asparagine => "Asparagine",
            Self::Pyrrolysine => "Pyrrolysine",
            Self::Proline => "Proline",
            Self::Glutamine => "Glutamine",
            Self::Arginine => "Arginine",
            Self::Serine => "Serine",
            Self::Threonine => "Threonine",
            Self::Selenocysteine => "Selenocysteine",
            Self::Valine => "Valine",
            Self::Tryptophan => "Tryptophan",
            Self::Unknown => "Unknown",
            Self::Tyrosine => "Tyrosine",
            Self::AmbiguousGlutamine => "Glutamine or glutamic acid",
        }
    }

    /// Get the charge of the side chain at physiological pH.
    /// The ambiguous B and Z cover both a charged and an uncharged residue, so these and X are [`ChargeClass::Unknown`].
    pub const fn charge_class(self) -> ChargeClass {
        match self {
            Self::AsparticAcid | Self::GlutamicAcid => ChargeClass::Negative,
            Self::Arginine | Self::Histidine | Self::Lysine => ChargeClass::Positive,
            Self::AmbiguousAsparagine | Self::AmbiguousGlutamine | Self::Unknown => {
                ChargeClass::Unknown
            }
            Self::Alanine
            | Self::AmbiguousLeucine
            | Self::Asparagine
            | Self::Cysteine
            | Self::Glutamine
            | Self::Glycine
            | Self::Isoleucine
            | Self::Leucine
            | Self::Methionine
            | Self::Phenylalanine
            | Self::Proline
            | Self::Pyrrolysine
            | Self::Selenocysteine
            | Self::Serine
            | Self::Threonine
            | Self::Tryptophan
            | Self::Tyrosine
            | Self::Valine => ChargeClass::Uncharged,
        }
    }
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_letter_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_codes_unique() {
        assert_eq!(AminoAcid::IUPAC_AMINO_ACIDS.len(), AminoAcid::TOTAL_NUMBER);
        let codes = AminoAcid::IUPAC_AMINO_ACIDS
            .iter()
            .map(|aa| aa.one_letter_code())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(codes.len(), AminoAcid::TOTAL_NUMBER);
        assert!(codes.iter().all(char::is_ascii_uppercase));
    }

    #[test]
    fn charged_residues() {
        let charged = |class| {
            AminoAcid::CANONICAL_AMINO_ACIDS
                .iter()
                .filter(|aa| aa.charge_class() == class)
                .map(|aa| aa.one_letter_code())
                .collect::<String>()
        };
        assert_eq!(charged(ChargeClass::Negative), "DE");
        assert_eq!(charged(ChargeClass::Positive), "RHK");
        assert_eq!(charged(ChargeClass::Unknown), "");
        assert_eq!(AminoAcid::Unknown.charge_class(), ChargeClass::Unknown);
        assert_eq!(
            AminoAcid::AmbiguousLeucine.charge_class(),
            ChargeClass::Uncharged
        );
    }

    #[test]
    fn metadata() {
        assert_eq!(AminoAcid::GlutamicAcid.three_letter_code(), "Glu");
        assert_eq!(AminoAcid::AsparticAcid.name(), "Aspartic acid");
        assert_eq!(AminoAcid::Histidine.to_string(), "H");
    }
}
