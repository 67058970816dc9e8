//! Handle residues and their properties
mod aminoacid;
mod properties;

pub use aminoacid::*;
pub use properties::*;
