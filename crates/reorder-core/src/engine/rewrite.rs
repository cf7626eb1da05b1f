use crate::core::models::document::{Document, Splice, split_terminator};
use crate::core::models::order::TypeOrder;
use crate::core::models::section::{SectionKind, SectionSpan};
use crate::core::models::symbols::{MassTable, TypeId, TypeSymbolMap};
use crate::engine::error::EngineError;
use tracing::{debug, warn};

/// A symbol whose mass could not be found and was written as `0.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultedMass {
    pub new_id: TypeId,
    pub symbol: String,
}

/// Frames a regenerated section body: the header line, one blank separator, the rows, and
/// a trailing blank line when nothing follows the section.
fn framed_block(
    document: &Document,
    span: Option<&SectionSpan>,
    header: String,
    rows: Vec<String>,
) -> Vec<String> {
    let ending = document.line_ending().as_str();
    let (header_body, terminator) = split_terminator(&header);
    let terminator = if terminator.is_empty() { ending } else { terminator };

    let mut block = Vec::with_capacity(rows.len() + 3);
    block.push(format!("{}{}", header_body, terminator));
    block.push(ending.to_string());
    block.extend(rows);
    if span.is_none_or(|span| span.ends_document(document)) {
        block.push(ending.to_string());
    }
    block
}

fn type_label_rows(document: &Document, order: &TypeOrder) -> Vec<String> {
    let ending = document.line_ending().as_str();
    order
        .numbered()
        .map(|(new_id, symbol)| format!("{} {}{}", new_id, symbol, ending))
        .collect()
}

/// Plans the replacement of the `Atom Type Labels` section at `header` with rows
/// `1 <sym1>`, `2 <sym2>`, ... following `order`. The original header line is kept.
pub fn plan_type_labels(document: &Document, header: usize, order: &TypeOrder) -> Splice {
    let span = SectionSpan::resolve(document, SectionKind::AtomTypeLabels, header);
    let header_line = document.line(header).unwrap_or_default().to_string();
    let block = framed_block(
        document,
        Some(&span),
        header_line,
        type_label_rows(document, order),
    );
    Splice::new(span.extent(), block)
}

/// Plans a new `Atom Type Labels` section inserted before line `before`.
pub fn plan_new_type_labels(document: &Document, before: usize, order: &TypeOrder) -> Splice {
    let mut block = framed_block(
        document,
        None,
        SectionKind::AtomTypeLabels.name().to_string(),
        type_label_rows(document, order),
    );
    if before >= document.len() {
        block.insert(0, document.line_ending().as_str().to_string());
    }
    Splice::insert(before, block)
}

/// Plans the replacement of the `Masses` section at `header` in the order of `order`.
///
/// Each symbol's mass is looked up through its old id: via `old_symbols` when the file
/// carries symbol metadata, otherwise by position (the old id equals the new one). Rows are
/// written as `<new_id> <mass:.8> # <symbol>`. A symbol without a recorded mass is written
/// with `0.0` and reported, or rejected when `strict` is set.
///
/// # Errors
///
/// Returns [`EngineError::MissingMass`] in strict mode when a symbol has no mass.
pub fn plan_masses(
    document: &Document,
    header: usize,
    old_masses: &MassTable,
    old_symbols: &TypeSymbolMap,
    order: &TypeOrder,
    strict: bool,
) -> Result<(Splice, Vec<DefaultedMass>), EngineError> {
    let span = SectionSpan::resolve(document, SectionKind::Masses, header);
    let ending = document.line_ending().as_str();
    let mut defaulted = Vec::new();
    let mut rows = Vec::with_capacity(order.len());

    for (new_id, symbol) in order.numbered() {
        let old_id = if old_symbols.is_empty() {
            Some(new_id)
        } else {
            old_symbols.id_of(symbol)
        };
        let mass = match old_id.and_then(|id| old_masses.mass(id)) {
            Some(mass) => mass,
            None if strict => {
                return Err(EngineError::MissingMass {
                    symbol: symbol.to_string(),
                    new_id,
                });
            }
            None => {
                warn!(
                    "No mass recorded for '{}' (new type {}); writing 0.0",
                    symbol, new_id
                );
                defaulted.push(DefaultedMass {
                    new_id,
                    symbol: symbol.to_string(),
                });
                0.0
            }
        };
        rows.push(format!("{} {:.8} # {}{}", new_id, mass, symbol, ending));
    }

    let header_line = document.line(header).unwrap_or_default().to_string();
    let block = framed_block(document, Some(&span), header_line, rows);
    debug!("Planned Masses rewrite over lines {:?}", span.extent());
    Ok((Splice::new(span.extent(), block), defaulted))
}

/// Rewrites the `Atom Type Labels` section at `header` in place.
pub fn rewrite_type_labels(
    document: &mut Document,
    header: usize,
    order: &TypeOrder,
) -> Result<(), EngineError> {
    let splice = plan_type_labels(document, header, order);
    document.apply_splices(vec![splice])?;
    Ok(())
}

/// Rewrites the `Masses` section at `header` in place. See [`plan_masses`].
pub fn rewrite_masses(
    document: &mut Document,
    header: usize,
    old_masses: &MassTable,
    old_symbols: &TypeSymbolMap,
    order: &TypeOrder,
    strict: bool,
) -> Result<Vec<DefaultedMass>, EngineError> {
    let (splice, defaulted) =
        plan_masses(document, header, old_masses, old_symbols, order, strict)?;
    document.apply_splices(vec![splice])?;
    Ok(defaulted)
}
