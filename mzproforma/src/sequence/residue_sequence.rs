use std::{ops::Index, str::FromStr};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{
    ProFormaErrorKind,
    ontology::ModificationRegistry,
    sequence::SequenceElement,
};

/// An ordered sequence of residues, each with at most one attached modification.
///
/// A sequence is created from its plain one letter codes, modifications are attached afterwards
/// with [`Self::set_modification`]. Its display form shows every modification as a mass shift tag.
///
/// ```rust
/// use mzproforma::prelude::*;
/// let mut registry = ModificationRegistry::default();
/// registry.register_custom("15.99", 15.99).unwrap();
/// let mut sequence: Sequence = "PEPMIDE".parse().unwrap();
/// sequence.set_modification(3, "15.99", &registry).unwrap();
/// assert_eq!(sequence.to_string(), "PEPM[+15.99]IDE");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Sequence {
    elements: Vec<SequenceElement>,
}

impl Sequence {
    /// Build a sequence from letters that are already known to be valid residue codes
    pub(crate) fn from_letters(letters: &str) -> Self {
        Self {
            elements: letters.chars().map(SequenceElement::new).collect(),
        }
    }

    /// The number of residues
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if there are no residues
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the one letter code of the residue at the given index
    pub fn residue(&self, index: usize) -> Option<char> {
        self.elements.get(index).map(|element| element.residue)
    }

    /// Iterate over all sequence elements
    pub fn iter(&self) -> std::slice::Iter<'_, SequenceElement> {
        self.elements.iter()
    }

    /// All sequence elements
    pub fn sequence(&self) -> &[SequenceElement] {
        &self.elements
    }

    /// The plain residues, without any modifications
    pub fn residues(&self) -> String {
        self.elements.iter().map(|element| element.residue).collect()
    }

    /// Attach the modification with the given id to the residue at the given position, replacing any
    /// modification that was attached there before.
    /// # Errors
    /// If the position is outside of the sequence or the id is not present in the registry.
    pub fn set_modification(
        &mut self,
        position: usize,
        id: &str,
        registry: &ModificationRegistry,
    ) -> Result<(), BoxedError<'static, ProFormaErrorKind>> {
        let length = self.len();
        let element = self.elements.get_mut(position).ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::PositionOutOfRange,
                "Invalid modification position",
                format!(
                    "The position {position} is outside of the sequence of length {length}"
                ),
                Context::none(),
            )
        })?;
        let record = registry.get(id).ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::UnknownModification,
                "Unknown modification",
                "The modification is not present in the modification registry",
                Context::show(id.to_string()),
            )
        })?;
        element.modification = Some(record.clone());
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = BoxedError<'static, ProFormaErrorKind>;

    /// Read a sequence of plain one letter residue codes.
    /// # Errors
    /// If any character is not an ASCII letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(index) = s.chars().position(|c| !c.is_ascii_alphabetic()) {
            return Err(BoxedError::new(
                ProFormaErrorKind::InvalidResidue,
                "Invalid residue",
                "A sequence can only contain letters as residue codes",
                Context::line(None, s, index, 1).to_owned(),
            ));
        }
        Ok(Self::from_letters(s))
    }
}

impl Index<usize> for Sequence {
    type Output = SequenceElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a SequenceElement;
    type IntoIter = std::slice::Iter<'a, SequenceElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for element in &self.elements {
            element.display(f)?;
        }
        Ok(())
    }
}
