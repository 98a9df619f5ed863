mod pro_forma;
mod residue_sequence;
mod sequence_element;

pub use pro_forma::*;
pub use residue_sequence::*;
pub use sequence_element::*;
