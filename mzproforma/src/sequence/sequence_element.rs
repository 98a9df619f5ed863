use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{helper_functions::write_mass_tag, ontology::ModificationRecord};

/// One block in a sequence meaning a residue and its accompanying modification
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct SequenceElement {
    /// The one letter residue code
    pub residue: char,
    /// The attached modification, if any
    pub modification: Option<Arc<ModificationRecord>>,
}

impl SequenceElement {
    /// Create a new unmodified sequence element
    pub const fn new(residue: char) -> Self {
        Self {
            residue,
            modification: None,
        }
    }

    /// Write the residue followed by the mass shift tag of its modification (if present)
    pub(crate) fn display(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "{}", self.residue)?;
        if let Some(modification) = &self.modification {
            write_mass_tag(f, modification.mass_delta.0)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for SequenceElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}
