//! The available ontologies

use serde::{Deserialize, Serialize};

/// All ontologies that can qualify a modification name, as in `UNIMOD:35`
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum Ontology {
    #[default]
    /// Unimod
    Unimod,
    /// PSI-MOD
    Psimod,
    /// GNOme
    Gnome,
    /// XLMOD
    Xlmod,
    /// Resid
    Resid,
}

impl Ontology {
    /// The ontologies that are accepted as a CV prefix before a colon
    pub const CV_PREFIXED: &[Self] = &[
        Self::Unimod,
        Self::Psimod,
        Self::Resid,
        Self::Xlmod,
        Self::Gnome,
    ];

    /// Get the accession number name for the ontology
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unimod => "UNIMOD",
            Self::Psimod => "MOD",
            Self::Gnome => "GNO",
            Self::Xlmod => "XLMOD",
            Self::Resid => "RESID",
        }
    }

    /// Find the ontology for a CV prefix, the prefix has to match exactly (case sensitive)
    pub fn from_cv_prefix(prefix: &str) -> Option<Self> {
        Self::CV_PREFIXED
            .iter()
            .copied()
            .find(|ontology| ontology.name() == prefix)
    }
}

impl std::fmt::Display for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Unimod => "Unimod",
                Self::Psimod => "PSI-MOD",
                Self::Gnome => "GNOme",
                Self::Xlmod => "XLMOD",
                Self::Resid => "Resid",
            },
        )
    }
}
