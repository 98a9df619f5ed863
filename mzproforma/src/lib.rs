#![doc = include_str!("../README.md")]

mod error;
mod helper_functions;
/// The controlled vocabularies recognised in modification tags and the registry of known modifications.
pub mod ontology;
/// Contains all things related to sequences and their ProForma annotation.
pub mod sequence;

pub use error::ProFormaErrorKind;

/// A subset of the types and traits that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::ProFormaErrorKind;
    pub use crate::ontology::{ModificationRecord, ModificationRegistry, Ontology, Position};
    pub use crate::sequence::{ModificationAttributes, ProForma, Sequence, SequenceElement};
}

/// The result of a parser, contains the result and a list of warnings if it succeeded and only a list of errors if it failed.
pub type ParserResult<'a, T, Kind> =
    Result<(T, Vec<context_error::BoxedError<'a, Kind>>), Vec<context_error::BoxedError<'a, Kind>>>;
