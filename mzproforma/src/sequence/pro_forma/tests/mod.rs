#![allow(clippy::missing_panics_doc)]
mod annotate;

/// Generate tests that parse a sequence and check that writing it again gives the expected text
/// (the original text if no expected text is given).
#[macro_export]
macro_rules! pro_forma_round_trip {
    ($($name:ident: $case:literal $(=> $expected:literal)?),* $(,)?) => {
        $($crate::pro_forma_round_trip!(single $name, $case, ($($expected)? $case));)*
    };
    (single $name:ident, $case:literal, ($expected:literal $($rest:literal)?)) => {
        paste::paste! {
            #[test]
            fn [<round_trip_ $name>]() {
                let mut registry = $crate::ontology::ModificationRegistry::default();
                let mut pro_forma = $crate::sequence::ProForma::default();
                let (sequence, warnings) = pro_forma.parse_pro_forma($case, &mut registry).unwrap();
                assert!(warnings.is_empty(), "{}\n{:?}", $case, warnings);
                assert_eq!(sequence.to_string(), $expected, "{}", $case);

                let mut pro_forma = $crate::sequence::ProForma::new(
                    sequence.residues().parse().unwrap(),
                );
                pro_forma.parse_pro_forma($case, &mut registry).unwrap();
                assert_eq!(pro_forma.to_pro_forma(), $expected, "{}", $case);
            }
        }
    };
}

/// Generate tests that check that parsing fails with the given error kind.
#[macro_export]
macro_rules! pro_forma_negative {
    ($($name:ident: $case:literal => $kind:ident),* $(,)?) => {
        $(paste::paste! {
            #[test]
            fn [<negative_ $name>]() {
                let mut registry = $crate::ontology::ModificationRegistry::default();
                let res = $crate::sequence::ProForma::default().parse_pro_forma($case, &mut registry);
                let errors = res.expect_err($case);
                assert_eq!(errors.len(), 1, "{}\n{:?}", $case, errors);
                assert_eq!(
                    errors[0].get_kind(),
                    $crate::ProFormaErrorKind::$kind,
                    "{}\n{:?}",
                    $case,
                    errors
                );
            }
        })*
    };
}
