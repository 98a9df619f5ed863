mod display;
mod parse;
#[cfg(test)]
mod tests;

use std::{collections::HashMap, ops::RangeInclusive};

use context_error::*;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    ProFormaErrorKind,
    helper_functions::{canonical_id, char_span},
    ontology::{ModificationRegistry, Ontology},
    sequence::Sequence,
};

/// The modification stored for a single residue position
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ModificationAttributes {
    /// The mass shift in Dalton
    pub mass_shift: OrderedFloat<f64>,
    /// The id of the modification in the registry
    pub modification_id: String,
    /// The last position (inclusive) of the range this modification was placed on
    pub range_end: usize,
}

/// Reads and writes sequences annotated with mass shift tags (`M[+15.99]PEPTIDE`).
///
/// It holds a sequence and a table of modifications keyed by residue position. The table is
/// filled by [`Self::parse_pro_forma`] and [`Self::add_modification`] and written out together
/// with the sequence by [`Self::to_pro_forma`]. The table is never cleared, so entries from
/// earlier calls are kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProForma {
    sequence: Sequence,
    modifications: HashMap<usize, ModificationAttributes>,
}

impl ProForma {
    /// Create a new annotator for the given sequence, without any modifications
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            modifications: HashMap::new(),
        }
    }

    /// The sequence that is written by [`Self::to_pro_forma`]
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// The stored modification for this position, if any
    pub fn modification(&self, position: usize) -> Option<&ModificationAttributes> {
        self.modifications.get(&position)
    }

    /// All stored modifications keyed by position
    pub const fn modifications(&self) -> &HashMap<usize, ModificationAttributes> {
        &self.modifications
    }

    /// Place a modification on every residue in the given (inclusive) range. Every position gets
    /// its own copy of the modification, overwriting whatever was stored there, so when written
    /// out each residue in the range carries a tag. If the id is empty the canonical id (the mass
    /// shift with two decimals) is used. The id is registered as a custom modification.
    /// # Errors
    /// * If the range is empty or does not fit in the sequence.
    /// * If the id and mass shift cannot be registered, see [`ModificationRegistry::register_custom`].
    pub fn add_modification(
        &mut self,
        range: RangeInclusive<usize>,
        id: &str,
        mass_shift: f64,
        registry: &mut ModificationRegistry,
    ) -> Result<(), BoxedError<'static, ProFormaErrorKind>> {
        let (start, end) = range.clone().into_inner();
        if range.is_empty() || start >= self.sequence.len() || end >= self.sequence.len() {
            return Err(BoxedError::new(
                ProFormaErrorKind::PositionOutOfRange,
                "Invalid modification range",
                format!(
                    "The range {start}..={end} is not a valid range on a sequence of length {}",
                    self.sequence.len()
                ),
                Context::none(),
            ));
        }

        let id = if id.is_empty() {
            canonical_id(mass_shift)
        } else {
            id.to_string()
        };
        registry.register_custom(&id, mass_shift)?;
        for position in range {
            self.modifications.insert(
                position,
                ModificationAttributes {
                    mass_shift: OrderedFloat(mass_shift),
                    modification_id: id.clone(),
                    range_end: end,
                },
            );
        }
        Ok(())
    }

    /// Check that a CV qualified modification (`UNIMOD:35`) uses a supported CV prefix. The
    /// supported prefixes are `UNIMOD`, `MOD`, `RESID`, `XLMOD`, and `GNO`. Only the prefix is
    /// checked, the accession after the colon is not resolved.
    /// # Errors
    /// If there is no colon or the part before the first colon is not a supported prefix.
    pub fn validate_cv_modification(
        modification: &str,
    ) -> Result<Ontology, BoxedError<'_, ProFormaErrorKind>> {
        let Some((prefix, _)) = modification.split_once(':') else {
            return Err(BoxedError::new(
                ProFormaErrorKind::UnsupportedOntology,
                "Invalid CV modification",
                "No CV prefix found in modification",
                Context::show(modification),
            ));
        };
        Ontology::from_cv_prefix(prefix).ok_or_else(|| {
            let (offset, length) = char_span(modification, 0, prefix.len());
            BoxedError::new(
                ProFormaErrorKind::UnsupportedOntology,
                "Invalid CV modification",
                format!(
                    "Unsupported CV/ontology, use one of: {}",
                    Ontology::CV_PREFIXED
                        .iter()
                        .map(|o| format!("{} ({o})", o.name()))
                        .join(", ")
                ),
                Context::line(None, modification, offset, length.max(1)),
            )
        })
    }
}
