//! Fuzz target for counting charged residues
use afl::*;
use mzcharge::charge::{charge_composition, count_negative, count_positive};

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            match (count_negative(s), count_positive(s), charge_composition(s)) {
                (Ok(negative), Ok(positive), Ok(composition)) => {
                    assert_eq!(negative, composition.negative());
                    assert_eq!(positive, composition.positive());
                    assert_eq!(composition.total(), s.len());
                }
                (Err(negative), Err(positive), Err(composition)) => {
                    // All counts have to reject the same residue
                    assert_eq!(negative, positive);
                    assert_eq!(negative, composition);
                    assert!(s[negative.index()..].starts_with(|c: char| {
                        c.to_ascii_uppercase() == negative.residue()
                    }));
                }
                _ => panic!("The counts disagree on the validity of {s:?}"),
            }
        }
    });
}
