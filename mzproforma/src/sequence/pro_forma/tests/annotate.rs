use context_error::*;

use crate::{
    ProFormaErrorKind,
    ontology::{ModificationRegistry, Ontology},
    sequence::ProForma,
};

fn pro_forma(sequence: &str) -> ProForma {
    ProForma::new(sequence.parse().unwrap())
}

#[test]
fn add_single_positions() {
    let mut registry = ModificationRegistry::default();
    let mut pro_forma = pro_forma("MPEPTIDE");
    pro_forma
        .add_modification(0..=0, "250.50", 250.50, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(4..=4, "79.97", 79.97, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(6..=6, "45.00", 45.00, &mut registry)
        .unwrap();
    assert_eq!(
        pro_forma.to_pro_forma(),
        "M[+250.50]PEPT[+79.97]ID[+45.00]E"
    );

    let mut pro_forma = self::pro_forma("MGPEPTIDE");
    pro_forma
        .add_modification(0..=0, "250.50", 250.50, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(3..=3, "79.97", 79.97, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(5..=5, "45.00", 45.00, &mut registry)
        .unwrap();
    assert_eq!(
        pro_forma.to_pro_forma(),
        "M[+250.50]GPE[+79.97]PT[+45.00]IDE"
    );
    assert_eq!(registry.len(), 3);
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn invalid_positions() {
    let mut registry = ModificationRegistry::default();
    let mut pro_forma = pro_forma("MGPEPTIDE");
    for range in [10..=10, 0..=10, 9..=9, 5..=3, 12..=4] {
        let error = pro_forma
            .add_modification(range.clone(), "100.00", 100.00, &mut registry)
            .unwrap_err();
        assert_eq!(
            error.get_kind(),
            ProFormaErrorKind::PositionOutOfRange,
            "{range:?}"
        );
    }
    assert!(pro_forma.modifications().is_empty());
    assert!(registry.is_empty());
}

#[test]
fn invalid_registration() {
    let mut registry = ModificationRegistry::default();
    let mut pro_forma = pro_forma("MGPEPTIDE");
    let error = pro_forma
        .add_modification(0..=2, "Label", 0.0, &mut registry)
        .unwrap_err();
    assert_eq!(error.get_kind(), ProFormaErrorKind::InvalidRegistration);
    let error = pro_forma
        .add_modification(0..=0, "", 0.0, &mut registry)
        .unwrap_err();
    assert_eq!(error.get_kind(), ProFormaErrorKind::InvalidRegistration);
    assert!(pro_forma.modifications().is_empty());
    assert_eq!(pro_forma.to_pro_forma(), "MGPEPTIDE");
}

#[test]
fn canonical_id_for_empty_id() {
    let mut registry = ModificationRegistry::default();
    let mut pro_forma = pro_forma("MGPEPTIDE");
    pro_forma
        .add_modification(0..=0, "", 250.5, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(8..=8, "", -18.0106, &mut registry)
        .unwrap();
    assert!(registry.contains("250.50"));
    assert!(registry.contains("-18.01"));
    assert_eq!(pro_forma.modification(8).unwrap().modification_id, "-18.01");
    assert_eq!(pro_forma.to_pro_forma(), "M[+250.50]GPEPTIDE[-18.01]");
}

#[test]
fn range_tags_every_residue() {
    let mut registry = ModificationRegistry::default();
    let mut pro_forma = pro_forma("PEPTIDE");
    pro_forma
        .add_modification(1..=3, "Label", 4.03, &mut registry)
        .unwrap();
    assert_eq!(pro_forma.to_pro_forma(), "PE[+4.03]P[+4.03]T[+4.03]IDE");
    for position in 1..=3 {
        let attributes = pro_forma.modification(position).unwrap();
        assert_eq!(attributes.modification_id, "Label");
        assert_eq!(attributes.range_end, 3);
    }
    assert!(pro_forma.modification(0).is_none());
    assert!(pro_forma.modification(4).is_none());
    let record = registry.get("Label").unwrap();
    assert_eq!(record.full_id, "Custom|Label");
}

#[test]
fn overwrite_and_boundaries() {
    let mut registry = ModificationRegistry::default();
    let mut single = pro_forma("A");
    single
        .add_modification(0..=0, "100.00", 100.00, &mut registry)
        .unwrap();
    assert_eq!(single.to_pro_forma(), "A[+100.00]");

    let mut pro_forma = pro_forma("MGPEPTIDE");
    pro_forma
        .add_modification(0..=3, "250.50", 250.50, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(0..=0, "50.00", 50.00, &mut registry)
        .unwrap();
    pro_forma
        .add_modification(8..=8, "30.00", 30.00, &mut registry)
        .unwrap();
    assert_eq!(
        pro_forma.to_pro_forma(),
        "M[+50.00]G[+250.50]P[+250.50]E[+250.50]PTIDE[+30.00]"
    );
    assert_eq!(pro_forma.modification(0).unwrap().range_end, 0);
    assert_eq!(pro_forma.modification(1).unwrap().range_end, 3);
}

#[test]
fn single_position_round_trip() {
    let mut registry = ModificationRegistry::default();
    let mut built = pro_forma("SAMPLERSEQ");
    for (position, mass) in [(0, 42.0106), (2, 15.9949), (6, -0.9840), (9, 79.9663)] {
        built
            .add_modification(position..=position, "", mass, &mut registry)
            .unwrap();
    }
    let written = built.to_pro_forma();
    assert_eq!(written, "S[+42.01]AM[+15.99]PLER[-0.98]SEQ[+79.97]");

    let mut parsed = pro_forma("SAMPLERSEQ");
    let (sequence, warnings) = parsed.parse_pro_forma(&written, &mut registry).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(parsed.to_pro_forma(), written);
    assert_eq!(sequence.to_string(), written);
}

#[test]
fn cv_modifications() {
    assert_eq!(
        ProForma::validate_cv_modification("UNIMOD:35").unwrap(),
        Ontology::Unimod
    );
    assert_eq!(
        ProForma::validate_cv_modification("MOD:00046").unwrap(),
        Ontology::Psimod
    );
    assert_eq!(
        ProForma::validate_cv_modification("RESID:AA0037").unwrap(),
        Ontology::Resid
    );
    assert_eq!(
        ProForma::validate_cv_modification("XLMOD:02001").unwrap(),
        Ontology::Xlmod
    );
    assert_eq!(
        ProForma::validate_cv_modification("GNO:G59626AS").unwrap(),
        Ontology::Gnome
    );
    for invalid in ["Oxidation", "PSI:1", "unimod:35", "CUSTOM:1", ":35", ""] {
        let error = ProForma::validate_cv_modification(invalid).unwrap_err();
        assert_eq!(
            error.get_kind(),
            ProFormaErrorKind::UnsupportedOntology,
            "{invalid}"
        );
    }

    let error = ProForma::validate_cv_modification("ΨMOD:1").unwrap_err();
    assert!(error.get_contexts()[0] == Context::line(None, "ΨMOD:1", 0, 4));
    assert!(error.get_long_description().contains("MOD (PSI-MOD)"));
}
