use crate::{helper_functions::write_mass_tag, sequence::ProForma};

impl ProForma {
    /// Write the sequence with a mass shift tag after every residue that has a stored
    /// modification. This only uses the mass shifts stored in the modification table, so a
    /// modification is always written as `[+N.NN]` regardless of its id.
    pub fn to_pro_forma(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ProForma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, element) in self.sequence.iter().enumerate() {
            write!(f, "{}", element.residue)?;
            if let Some(modification) = self
                .modifications
                .get(&index)
                .filter(|m| !m.modification_id.is_empty())
            {
                write_mass_tag(f, modification.mass_shift.0)?;
            }
        }
        Ok(())
    }
}
