use crate::core::models::mapping::IdMapping;
use crate::core::models::order::TypeOrder;
use crate::core::models::symbols::{TypeId, TypeSymbolMap};
use crate::engine::error::EngineError;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Derives the old-to-new type id mapping induced by `order`.
///
/// With symbol metadata, every old id is sent to the 1-based position of its symbol in
/// `order`. Without metadata, the file's ids are assumed to already follow `order` and the
/// identity over `1..=order.len()` is returned; nothing can be verified in that case.
///
/// `order` is duplicate-free by construction, so an invalid order cannot reach this point.
///
/// # Errors
///
/// - [`EngineError::OrderMismatch`] if the file's symbol set differs from the order's.
/// - [`EngineError::DuplicateSymbol`] if two old ids share a symbol.
pub fn build_mapping(old_symbols: &TypeSymbolMap, order: &TypeOrder) -> Result<IdMapping, EngineError> {
    if old_symbols.is_empty() {
        warn!(
            "No type symbols in file; assuming existing ids 1..={} already follow the requested order.",
            order.len()
        );
        return Ok(IdMapping::identity(order.len()));
    }

    let in_file = old_symbols.symbol_set();
    let in_order: BTreeSet<&str> =
        order.symbols().iter().map(String::as_str).collect();
    if in_file != in_order {
        return Err(EngineError::OrderMismatch {
            in_file_only: in_file.difference(&in_order).map(|s| s.to_string()).collect(),
            in_order_only: in_order.difference(&in_file).map(|s| s.to_string()).collect(),
        });
    }

    let mut symbol_to_old: HashMap<&str, TypeId> = HashMap::with_capacity(old_symbols.len());
    for (id, symbol) in old_symbols.iter() {
        if let Some(&first) = symbol_to_old.get(symbol) {
            return Err(EngineError::DuplicateSymbol {
                symbol: symbol.to_string(),
                first,
                second: id,
            });
        }
        symbol_to_old.insert(symbol, id);
    }

    let mapping: IdMapping = order
        .numbered()
        .map(|(new_id, symbol)| (symbol_to_old[symbol], new_id))
        .collect();

    debug!("Built type mapping (old -> new): {:?}", mapping.iter().collect::<Vec<_>>());
    Ok(mapping)
}
