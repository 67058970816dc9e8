//! Property based tests for the charged residue counts

use mzcharge::prelude::*;
use proptest::prelude::*;

const CANONICAL: &str = "ACDEFGHIKLMNPQRSTVWYacdefghiklmnpqrstvwy";

fn valid_sequence() -> impl Strategy<Value = String> {
    let residues = CANONICAL.chars().collect::<Vec<_>>();
    proptest::collection::vec(proptest::sample::select(residues), 0..64)
        .prop_map(|residues| residues.into_iter().collect())
}

fn invalid_residue() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("Not a canonical amino acid", |c| {
        !STANDARD_ALPHABET.contains(c.to_ascii_uppercase())
    })
}

proptest! {
    #[test]
    fn charged_at_most_length(sequence in valid_sequence()) {
        let negative = count_negative(&sequence).unwrap();
        let positive = count_positive(&sequence).unwrap();
        let length = sequence.chars().count();
        prop_assert!(negative + positive <= length);
        let all_charged = sequence
            .chars()
            .all(|c| "DEKRH".contains(c.to_ascii_uppercase()));
        prop_assert_eq!(negative + positive == length, all_charged);
    }

    #[test]
    fn case_insensitive(sequence in valid_sequence()) {
        let lower = sequence.to_lowercase();
        let upper = sequence.to_uppercase();
        prop_assert_eq!(count_negative(&sequence), count_negative(&lower));
        prop_assert_eq!(count_negative(&sequence), count_negative(&upper));
        prop_assert_eq!(count_positive(&sequence), count_positive(&lower));
        prop_assert_eq!(count_positive(&sequence), count_positive(&upper));
    }

    #[test]
    fn idempotent(sequence in valid_sequence()) {
        prop_assert_eq!(count_negative(&sequence), count_negative(&sequence));
        prop_assert_eq!(count_positive(&sequence), count_positive(&sequence));
    }

    #[test]
    fn composition_agrees(sequence in valid_sequence()) {
        let composition = charge_composition(&sequence).unwrap();
        prop_assert_eq!(Ok(composition.negative()), count_negative(&sequence));
        prop_assert_eq!(Ok(composition.positive()), count_positive(&sequence));
        prop_assert_eq!(composition.total(), sequence.len());
    }

    #[test]
    fn invalid_rejected(
        prefix in valid_sequence(),
        residue in invalid_residue(),
        suffix in valid_sequence()
    ) {
        let sequence = format!("{prefix}{residue}{suffix}");
        let negative = count_negative(&sequence).unwrap_err();
        let positive = count_positive(&sequence).unwrap_err();
        prop_assert_eq!(negative, positive);
        prop_assert_eq!(negative.residue(), residue.to_ascii_uppercase());
        prop_assert_eq!(negative.index(), prefix.len());
    }
}
