//! The [`InvalidResidue`] error and the [`ResidueErrorKind`] used to report it with context.

use context_error::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The error that a sequence contains a character that is not part of the residue alphabet
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvalidResidue {
    residue: char,
    index: usize,
}

impl InvalidResidue {
    pub(crate) const fn new(residue: char, index: usize) -> Self {
        Self { residue, index }
    }

    /// The offending character
    pub const fn residue(self) -> char {
        self.residue
    }

    /// The byte offset of the offending character in the sequence
    pub const fn index(self) -> usize {
        self.index
    }

    /// Build a full error report that points at the offending character in the given sequence.
    /// The sequence should be the one that was validated, otherwise the context points at the wrong location.
    pub fn to_boxed_error(self, sequence: &str) -> BoxedError<'_, ResidueErrorKind> {
        BoxedError::new(
            ResidueErrorKind::InvalidResidue,
            "Invalid amino acid",
            format!(
                "'{}' is not a valid amino acid, only one letter amino acid codes are allowed",
                self.residue
            ),
            Context::line(None, sequence, self.index, self.residue.len_utf8()),
        )
    }
}

impl std::fmt::Display for InvalidResidue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' at index {} is not a valid amino acid",
            self.residue, self.index
        )
    }
}

impl std::error::Error for InvalidResidue {}

/// The kind of error that can occur when validating a sequence
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ResidueErrorKind {
    /// A character is not part of the residue alphabet
    #[default]
    InvalidResidue,
}

impl ErrorKind for ResidueErrorKind {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        "error"
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            InvalidResidue::new('X', 3).to_string(),
            "'X' at index 3 is not a valid amino acid"
        );
    }

    #[test]
    fn boxed_error() {
        let error = InvalidResidue::new('X', 2).to_boxed_error("ACXD");
        assert!(matches!(
            error.get_kind(),
            ResidueErrorKind::InvalidResidue
        ));
        assert!(error.get_kind().is_error(()));
        assert_eq!(error.get_short_description(), "Invalid amino acid");
        assert!(error.get_long_description().contains("'X'"));
    }
}
