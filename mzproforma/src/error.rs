//! The [`ProFormaErrorKind`] which makes it easy for downstream users of the error type to match on the exact error.

use context_error::ErrorKind;

/// All ways in which reading, writing, or annotating a sequence can fail
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ProFormaErrorKind {
    /// A modification tag is missing its opening `[` or closing `]`
    #[default]
    MalformedBracket,
    /// The tag is empty or does not start with `+`/`-` and is not a cation
    InvalidModificationToken,
    /// The tag could not be read as a finite number
    NonNumericModification,
    /// A custom modification was registered with an empty id or a zero mass shift
    InvalidRegistration,
    /// A position (or range) lies outside of the sequence
    PositionOutOfRange,
    /// A CV qualified modification uses an unknown or missing prefix
    UnsupportedOntology,
    /// A sequence contains a character that is not a residue code
    InvalidResidue,
    /// The modification id is not present in the registry
    UnknownModification,
    /// A stored modification registry could not be read or written
    InvalidDatabase,
    /// A stored modification could not be placed on the sequence and was left out
    SkippedModification,
}

impl ErrorKind for ProFormaErrorKind {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        match self {
            Self::SkippedModification => "warning",
            _ => "error",
        }
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        !matches!(self, Self::SkippedModification)
    }
}
