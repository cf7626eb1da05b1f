use crate::core::models::document::{Document, split_terminator};
use crate::core::models::mapping::IdMapping;
use crate::core::models::section::{SectionKind, SectionSpan};
use crate::core::models::symbols::TypeId;
use crate::engine::error::EngineError;
use crate::engine::metadata::content_rows;
use tracing::{debug, trace};

/// Renumbers the type ids stored in `columns` of every data row of a section.
///
/// Blank separator lines and comment-only lines are skipped. Each rewritten row is
/// re-joined with single spaces and keeps its original line terminator; no other token
/// changes. The document is only modified once every row has been validated, so on error
/// it is left exactly as it was.
///
/// Returns the number of rows rewritten.
///
/// # Errors
///
/// - [`EngineError::MalformedSection`] if a row is too short or its type token is not an
///   integer.
/// - [`EngineError::UnmappedTypeId`] if a row references an id the mapping does not cover.
pub fn remap_columns(
    document: &mut Document,
    kind: SectionKind,
    header: usize,
    columns: &[usize],
    mapping: &IdMapping,
) -> Result<usize, EngineError> {
    let span = SectionSpan::resolve(document, kind, header);
    let mut rewritten = Vec::with_capacity(span.rows.len());

    for (index, line) in content_rows(document, &span) {
        let (body, terminator) = split_terminator(line);
        let mut tokens: Vec<String> = body.split_whitespace().map(str::to_string).collect();

        for &column in columns {
            let Some(token) = tokens.get_mut(column) else {
                return Err(EngineError::malformed(
                    kind,
                    index,
                    format!(
                        "row has {} column(s); type column {} is out of range",
                        body.split_whitespace().count(),
                        column
                    ),
                ));
            };
            let old_id: TypeId = token.parse().map_err(|_| {
                EngineError::malformed(
                    kind,
                    index,
                    format!("type id '{}' in column {} is not an integer", token, column),
                )
            })?;
            let new_id = mapping.get(old_id).ok_or(EngineError::UnmappedTypeId {
                section: kind,
                line: index + 1,
                type_id: old_id,
            })?;
            trace!(line = index + 1, column, old_id, new_id, "Remapping type id");
            *token = new_id.to_string();
        }

        rewritten.push((index, format!("{}{}", tokens.join(" "), terminator)));
    }

    let count = rewritten.len();
    for (index, line) in rewritten {
        document.replace_line(index, line);
    }
    debug!(
        "Remapped {} row(s) of '{}' (columns {:?})",
        count, kind, columns
    );
    Ok(count)
}

/// Renumbers a single type column. See [`remap_columns`].
pub fn remap_column(
    document: &mut Document,
    kind: SectionKind,
    header: usize,
    column: usize,
    mapping: &IdMapping,
) -> Result<usize, EngineError> {
    remap_columns(document, kind, header, &[column], mapping)
}
