mod ontology;
mod registry;

pub use ontology::*;
pub use registry::*;
