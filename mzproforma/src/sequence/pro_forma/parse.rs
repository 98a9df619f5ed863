use context_error::*;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    ParserResult, ProFormaErrorKind,
    helper_functions::{canonical_id, char_span, float_prefix, next_char},
    ontology::ModificationRegistry,
    sequence::{ModificationAttributes, ProForma, Sequence},
};

impl ProForma {
    /// Parse a sequence annotated with mass shift tags, for example `M[+250.50]PEPT[+79.97]IDE`.
    ///
    /// Every letter is a residue, every tag `[+N]` or `[-N]` is a mass shift placed on the residue
    /// directly before it. Any other character (like `(`, `)`, or `-`) is skipped, so
    /// `A(CDE)[+12.50]F` places the mass shift on the `E` only. Every mass shift is registered
    /// with its canonical id (the mass shift with two decimals) in the given registry and stored
    /// in the modification table of this annotator.
    ///
    /// All modifications in the table (including those from earlier calls) are then attached to
    /// the new sequence. Entries that do not fit on the new sequence are left out with a warning.
    /// The sequence held by this annotator is not changed.
    ///
    /// # Errors
    /// * If a tag is missing its closing bracket.
    /// * If a tag does not start with `+` or `-` (and is not a cation), for example a named modification.
    /// * If a tag does not start with a finite number. Only the leading number is used, any text
    ///   after it is ignored, so `[+250.50abc]` is read as `+250.50` and `[+0x10]` as `+16`.
    /// * If a tag has a mass shift of zero.
    pub fn parse_pro_forma<'a>(
        &mut self,
        value: &'a str,
        registry: &mut ModificationRegistry,
    ) -> ParserResult<'a, Sequence, ProFormaErrorKind> {
        let mut warnings = Vec::new();
        let mut letters = String::with_capacity(value.len());
        let mut residues = 0;
        let mut index = 0;
        let chars = value.as_bytes();

        while index < chars.len() {
            match chars[index] {
                c if c.is_ascii_alphabetic() => {
                    letters.push(char::from(c));
                    residues += 1;
                    index += 1;
                }
                b'[' => {
                    index = self
                        .parse_modification(value, index, residues, registry, &mut warnings)
                        .map_err(|err| vec![err])?;
                }
                _ => index += 1,
            }
        }

        let mut sequence = Sequence::from_letters(&letters);
        for (position, attributes) in self.modifications.iter().sorted_by_key(|(p, _)| **p) {
            if *position < sequence.len()
                && !attributes.modification_id.is_empty()
                && sequence
                    .set_modification(*position, &attributes.modification_id, registry)
                    .is_ok()
            {
                continue;
            }
            log::warn!(
                "Invalid modification '{}' at position {position}, skipped",
                attributes.modification_id
            );
            warnings.push(BoxedError::new(
                ProFormaErrorKind::SkippedModification,
                "Invalid modification",
                format!(
                    "The modification '{}' at position {position} could not be placed on a sequence of length {}",
                    attributes.modification_id,
                    sequence.len()
                ),
                Context::none().lines(0, value),
            ));
        }

        Ok((sequence, warnings))
    }

    /// Parse a single modification tag at (or after) `index`, store it for the residue before
    /// it, and return the index just after the closing bracket.
    fn parse_modification<'a>(
        &mut self,
        line: &'a str,
        index: usize,
        residues: usize,
        registry: &mut ModificationRegistry,
        warnings: &mut Vec<BoxedError<'a, ProFormaErrorKind>>,
    ) -> Result<usize, BoxedError<'a, ProFormaErrorKind>> {
        let chars = line.as_bytes();
        let open = next_char(chars, index, b'[').ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::MalformedBracket,
                "Invalid modification",
                "No opening bracket found for the modification",
                line_context(line, index, line.len()),
            )
        })?;
        let close = next_char(chars, open + 1, b']').ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::MalformedBracket,
                "Invalid modification",
                "No closing bracket found for the modification",
                line_context(line, open, line.len()),
            )
        })?;
        let tag = &line[open + 1..close];
        let context = line_context(line, open, close + 1);

        if tag.is_empty() || !(tag.starts_with(['+', '-']) || tag.contains("Cation:")) {
            return Err(BoxedError::new(
                ProFormaErrorKind::InvalidModificationToken,
                "Invalid modification",
                "A modification must start with '+' or '-' or be a recognised cation",
                context,
            ));
        }

        let mass_shift = float_prefix(tag)
            .map(|(mass_shift, _)| mass_shift)
            .filter(|m| m.is_finite())
            .ok_or_else(|| {
                BoxedError::new(
                    ProFormaErrorKind::NonNumericModification,
                    "Invalid modification",
                    "A modification has to start with a mass shift, which is a number",
                    context.clone(),
                )
            })?;
        let id = canonical_id(mass_shift);
        if registry.register_custom(&id, mass_shift).is_err() {
            return Err(BoxedError::new(
                ProFormaErrorKind::InvalidRegistration,
                "Invalid modification",
                "A mass shift of zero cannot be registered as a modification",
                context,
            ));
        }

        if let Some(position) = residues.checked_sub(1) {
            self.modifications.insert(
                position,
                ModificationAttributes {
                    mass_shift: OrderedFloat(mass_shift),
                    modification_id: id,
                    range_end: position,
                },
            );
        } else {
            log::warn!("Modification '{id}' has no preceding residue, skipped");
            warnings.push(BoxedError::new(
                ProFormaErrorKind::SkippedModification,
                "Invalid modification",
                "A modification is placed on the residue before it, but there is no residue before this modification",
                context,
            ));
        }

        Ok(close + 1)
    }
}

/// The context for the given byte range of the line, with its position counted in characters
fn line_context(line: &str, start: usize, end: usize) -> Context<'_> {
    let (offset, length) = char_span(line, start, end);
    Context::line(None, line, offset, length)
}
