//! Type-column inference for the `Atoms` section.
//!
//! The `Atoms` layout depends on the atom style (`atomic`, `charge`, `full`, ...), so the
//! position of the type id is not fixed by the format. This module guesses it from a single
//! sample row: the first token after the atom id that is a non-negative integer and one of
//! the known type ids wins. Layouts with another small integer column in front of the type
//! (e.g. a molecule id in `full` style) can be misdetected; pass the column explicitly for
//! those.

use crate::core::models::document::{Document, split_terminator};
use crate::core::models::section::{SectionKind, SectionSpan};
use crate::core::models::symbols::TypeId;
use crate::engine::error::EngineError;
use crate::engine::metadata::content_rows;
use std::collections::BTreeSet;
use tracing::debug;

fn is_unsigned_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Infers the 0-based type column of the `Atoms` section whose header is at `header`.
///
/// # Errors
///
/// Returns [`EngineError::ColumnNotFound`] if the section has no data row or no token of the
/// sample row qualifies.
pub fn infer_type_column(
    document: &Document,
    header: usize,
    known_old_ids: &BTreeSet<TypeId>,
) -> Result<usize, EngineError> {
    let span = SectionSpan::resolve(document, SectionKind::Atoms, header);
    let (index, sample) = content_rows(document, &span)
        .next()
        .ok_or(EngineError::ColumnNotFound { line: None })?;

    let column = split_terminator(sample)
        .0
        .split_whitespace()
        .enumerate()
        .skip(1)
        .find(|(_, token)| {
            is_unsigned_integer(token)
                && token
                    .parse::<TypeId>()
                    .is_ok_and(|id| known_old_ids.contains(&id))
        })
        .map(|(column, _)| column)
        .ok_or(EngineError::ColumnNotFound {
            line: Some(index + 1),
        })?;

    debug!(
        "Auto-detected type column {} from sample row at line {}",
        column,
        index + 1
    );
    Ok(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[TypeId]) -> BTreeSet<TypeId> {
        values.iter().copied().collect()
    }

    #[test]
    fn detects_atomic_style_type_column() {
        let doc = Document::from_text("Atoms # atomic\n\n1 2 0.0 0.0 0.0\n");
        assert_eq!(infer_type_column(&doc, 0, &ids(&[1, 2])).unwrap(), 1);
    }

    #[test]
    fn skips_the_atom_id_even_when_it_is_a_known_type() {
        let doc = Document::from_text("Atoms\n\n1 3 0.0 0.0 0.0\n");
        assert_eq!(infer_type_column(&doc, 0, &ids(&[1, 3])).unwrap(), 1);
    }

    #[test]
    fn skips_tokens_outside_the_known_ids_and_non_integers() {
        let doc = Document::from_text("Atoms # charge\n\n7 -1 0.5 2 0.0 0.0 0.0\n");
        assert_eq!(infer_type_column(&doc, 0, &ids(&[1, 2])).unwrap(), 3);
    }

    #[test]
    fn uses_first_row_after_comments_and_blank_lines() {
        let doc = Document::from_text("Atoms\n\n\n# id type x y z\n5 2 0 0 0\n6 9 1 1 1\n");
        assert_eq!(infer_type_column(&doc, 0, &ids(&[2])).unwrap(), 1);
    }

    #[test]
    fn full_style_molecule_id_is_a_known_limitation() {
        let doc = Document::from_text("Atoms # full\n\n1 1 2 0.0 0.0 0.0 0.0\n");
        assert_eq!(infer_type_column(&doc, 0, &ids(&[1, 2])).unwrap(), 1);
    }

    #[test]
    fn fails_without_a_qualifying_token() {
        let doc = Document::from_text("Atoms\n\n1 7 0.0 0.0 0.0\n");
        assert!(matches!(
            infer_type_column(&doc, 0, &ids(&[1, 2])),
            Err(EngineError::ColumnNotFound { line: Some(3) })
        ));
    }

    #[test]
    fn fails_on_empty_section() {
        let doc = Document::from_text("Atoms\n\n");
        assert!(matches!(
            infer_type_column(&doc, 0, &ids(&[1])),
            Err(EngineError::ColumnNotFound { line: None })
        ));
    }
}
