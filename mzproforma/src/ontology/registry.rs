//! The registry of known modifications that all annotation operations read from and add to

use std::{
    collections::HashMap,
    io::{BufReader, BufWriter, Write},
    path::Path,
    sync::Arc,
};

use context_error::*;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::ProFormaErrorKind;

/// Where on a sequence a modification is allowed to be placed
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Position {
    /// At any location
    #[default]
    Anywhere,
    /// At the N term of any peptide
    AnyNTerm,
    /// At the N term of a protein
    ProteinNTerm,
    /// At the C term of any peptide
    AnyCTerm,
    /// At the C term of a protein
    ProteinCTerm,
}

/// A single modification as known to a [`ModificationRegistry`]
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ModificationRecord {
    /// The id, this is the key in the registry
    pub id: String,
    /// The human readable name
    pub name: String,
    /// The fully qualified id, for custom modifications `Custom|<id>`
    pub full_id: String,
    /// The monoisotopic mass difference in Dalton
    pub mass_delta: OrderedFloat<f64>,
    /// The allowed placement
    pub specificity: Position,
}

impl ModificationRecord {
    /// The name given to every custom modification
    pub const CUSTOM_NAME: &'static str = "Custom Modification";

    /// Create a custom modification record for the given id and mass shift, this can be placed anywhere
    pub fn custom(id: impl Into<String>, mass_shift: f64) -> Self {
        let id = id.into();
        Self {
            full_id: format!("Custom|{id}"),
            id,
            name: Self::CUSTOM_NAME.to_string(),
            mass_delta: OrderedFloat(mass_shift),
            specificity: Position::Anywhere,
        }
    }
}

/// A store of modifications keyed by their id.
///
/// A registry is passed explicitly to all operations that need it, so a program can decide to
/// share one registry or keep multiple separate ones. Records are only ever added, once a record
/// exists for an id it is never changed or removed.
///
/// ```rust
/// use mzproforma::ontology::ModificationRegistry;
/// let mut registry = ModificationRegistry::default();
/// assert!(registry.register_custom("79.97", 79.97).unwrap());
/// // A second registration keeps the original mass
/// assert!(!registry.register_custom("79.97", 80.0).unwrap());
/// assert_eq!(registry.get("79.97").unwrap().mass_delta.0, 79.97);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModificationRegistry {
    records: HashMap<String, Arc<ModificationRecord>>,
}

impl ModificationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a record with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Get the record with this id
    pub fn get(&self, id: &str) -> Option<&Arc<ModificationRecord>> {
        self.records.get(id)
    }

    /// The number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ModificationRecord>> {
        self.records
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
    }

    /// Add a record if there is no record with the same id yet, returns true if the record was added.
    /// An existing record is left untouched, even if the given record is different.
    pub fn insert(&mut self, record: ModificationRecord) -> bool {
        if let Some(existing) = self.records.get(&record.id) {
            if existing.mass_delta != record.mass_delta {
                log::trace!(
                    "Modification '{}' is already registered with mass {}, ignoring mass {}",
                    record.id,
                    existing.mass_delta,
                    record.mass_delta
                );
            }
            false
        } else {
            log::debug!(
                "Registering modification '{}' ({}) with mass {}",
                record.id,
                record.full_id,
                record.mass_delta
            );
            self.records.insert(record.id.clone(), Arc::new(record));
            true
        }
    }

    /// Register a custom modification with the given id and mass shift, returns true if it was
    /// not yet present. If a modification with this id already exists nothing is changed.
    /// # Errors
    /// If the id is empty or the mass shift is zero (or not finite).
    pub fn register_custom(
        &mut self,
        id: &str,
        mass_shift: f64,
    ) -> Result<bool, BoxedError<'static, ProFormaErrorKind>> {
        if id.is_empty() || mass_shift == 0.0 || !mass_shift.is_finite() {
            return Err(BoxedError::new(
                ProFormaErrorKind::InvalidRegistration,
                "Invalid custom modification",
                format!(
                    "A custom modification needs a non empty id and a non zero mass shift, but got id '{id}' with mass shift {mass_shift}"
                ),
                Context::show(id.to_string()),
            ));
        }
        Ok(self.insert(ModificationRecord::custom(id, mass_shift)))
    }

    /// Write all records as a JSON list, ordered by id
    /// # Errors
    /// If the records could not be serialised.
    pub fn to_json(&self) -> Result<String, BoxedError<'static, ProFormaErrorKind>> {
        serde_json::to_string_pretty(&self.iter().collect_vec()).map_err(|err| {
            BoxedError::new(
                ProFormaErrorKind::InvalidDatabase,
                "Could not write modification registry",
                err.to_string(),
                Context::none(),
            )
        })
    }

    /// Read a registry from a JSON list of records. When an id occurs multiple times the first record is kept.
    /// # Errors
    /// If the text is not valid JSON or does not contain a list of records.
    pub fn from_json(value: &str) -> Result<Self, BoxedError<'static, ProFormaErrorKind>> {
        let records: Vec<ModificationRecord> = serde_json::from_str(value).map_err(|err| {
            BoxedError::new(
                ProFormaErrorKind::InvalidDatabase,
                "Invalid modification registry",
                err.to_string(),
                Context::show(value.to_string()),
            )
        })?;
        let mut registry = Self::new();
        for record in records {
            registry.insert(record);
        }
        Ok(registry)
    }

    /// Read a registry from a JSON file, see [`Self::from_json`]
    /// # Errors
    /// If the file could not be opened or parsed.
    pub fn load(path: &Path) -> Result<Self, BoxedError<'static, ProFormaErrorKind>> {
        let file = std::fs::File::open(path).map_err(|e| {
            BoxedError::new(
                ProFormaErrorKind::InvalidDatabase,
                "Modification registry could not be opened",
                e.to_string(),
                Context::none().source(path.to_string_lossy()).to_owned(),
            )
        })?;
        let records: Vec<ModificationRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                BoxedError::new(
                    ProFormaErrorKind::InvalidDatabase,
                    "Modification registry could not be parsed",
                    e.to_string(),
                    Context::none().source(path.to_string_lossy()).to_owned(),
                )
            })?;
        let mut registry = Self::new();
        for record in records {
            registry.insert(record);
        }
        Ok(registry)
    }

    /// Store this registry as a JSON file, see [`Self::to_json`]
    /// # Errors
    /// If the file could not be written to.
    pub fn save(&self, path: &Path) -> Result<(), BoxedError<'static, ProFormaErrorKind>> {
        let error = |e: String| {
            BoxedError::new(
                ProFormaErrorKind::InvalidDatabase,
                "Modification registry could not be saved",
                e,
                Context::none().source(path.to_string_lossy()).to_owned(),
            )
        };
        let file = std::fs::File::create(path).map_err(|e| error(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.iter().collect_vec())
            .map_err(|e| error(e.to_string()))?;
        writer.flush().map_err(|e| error(e.to_string()))
    }
}
