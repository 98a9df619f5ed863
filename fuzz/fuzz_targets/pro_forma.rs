//! Fuzz target for parsing mass shift annotated sequences
use afl::*;
use mzproforma::prelude::*;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            let mut registry = ModificationRegistry::default();
            let mut pro_forma = ProForma::default();
            if let Ok((sequence, _)) = pro_forma.parse_pro_forma(s, &mut registry) {
                // The plain residues always have to be a valid sequence on their own
                let plain: Sequence = sequence.residues().parse().unwrap();
                assert_eq!(plain.len(), sequence.len());
                let _unused = sequence.to_string();
                let _unused = ProForma::new(sequence).to_pro_forma();
            }
        }
    });
}
