use crate::core::models::document::{Document, is_comment, split_terminator};
use crate::core::models::section::{SectionKind, SectionSpan};
use crate::core::models::symbols::{MassEntry, MassTable, TypeId, TypeSymbolMap};
use crate::engine::error::EngineError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static ATOM_TYPES_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s+atom\s+types\b").expect("Atom types header pattern must compile")
});

fn parse_type_id(token: &str, section: SectionKind, index: usize) -> Result<TypeId, EngineError> {
    match token.parse::<TypeId>() {
        Ok(0) => Err(EngineError::malformed(section, index, "type id 0 is not valid")),
        Ok(id) => Ok(id),
        Err(_) => Err(EngineError::malformed(
            section,
            index,
            format!("type id '{}' is not a positive integer", token),
        )),
    }
}

/// Data rows of a section that carry content, skipping comment-only lines.
pub(crate) fn content_rows<'a>(
    document: &'a Document,
    span: &SectionSpan,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    span.rows
        .clone()
        .filter_map(move |index| document.line(index).map(|line| (index, line)))
        .filter(|(_, line)| !is_comment(line))
}

/// Reads the `Atom Type Labels` section whose header is at `header`.
///
/// Rows have the form `<id> <symbol> ...`; tokens after the symbol are ignored.
///
/// # Errors
///
/// Returns [`EngineError::MalformedSection`] if a row has fewer than two tokens, a type id
/// that is not a positive integer, or repeats an id.
pub fn read_type_labels(document: &Document, header: usize) -> Result<TypeSymbolMap, EngineError> {
    let section = SectionKind::AtomTypeLabels;
    let span = SectionSpan::resolve(document, section, header);
    let mut symbols = TypeSymbolMap::new();

    for (index, line) in content_rows(document, &span) {
        let mut tokens = split_terminator(line).0.split_whitespace();
        let (Some(id_token), Some(symbol)) = (tokens.next(), tokens.next()) else {
            return Err(EngineError::malformed(
                section,
                index,
                "expected '<type-id> <symbol>'",
            ));
        };
        let id = parse_type_id(id_token, section, index)?;
        if symbols.insert(id, symbol).is_some() {
            return Err(EngineError::malformed(
                section,
                index,
                format!("type id {} is labeled more than once", id),
            ));
        }
    }

    debug!("Read {} type label(s)", symbols.len());
    Ok(symbols)
}

/// Reads the `Masses` section whose header is at `header`.
///
/// Each row is split at its first `#`. The part before must start with `<id> <mass>`; the
/// trimmed part after, when non-empty, is taken as the type's symbol. Rows without a
/// comment contribute a mass but no symbol.
///
/// # Errors
///
/// Returns [`EngineError::MalformedSection`] if a row lacks an id or mass, either fails to
/// parse, or an id repeats.
pub fn read_masses(
    document: &Document,
    header: usize,
) -> Result<(MassTable, TypeSymbolMap), EngineError> {
    let section = SectionKind::Masses;
    let span = SectionSpan::resolve(document, section, header);
    let mut masses = MassTable::new();
    let mut symbols = TypeSymbolMap::new();

    for (index, line) in content_rows(document, &span) {
        let content = split_terminator(line).0;
        let (body, comment) = match content.split_once('#') {
            Some((body, comment)) => (body, Some(comment.trim())),
            None => (content, None),
        };

        let mut tokens = body.split_whitespace();
        let (Some(id_token), Some(mass_token)) = (tokens.next(), tokens.next()) else {
            return Err(EngineError::malformed(
                section,
                index,
                "expected '<type-id> <mass>'",
            ));
        };
        let id = parse_type_id(id_token, section, index)?;
        let mass: f64 = mass_token.parse().map_err(|_| {
            EngineError::malformed(section, index, format!("mass '{}' is not a number", mass_token))
        })?;

        let comment = comment.filter(|c| !c.is_empty()).map(str::to_string);
        if let Some(symbol) = &comment {
            symbols.insert(id, symbol.as_str());
        }
        if masses.insert(id, MassEntry { mass, comment }).is_some() {
            return Err(EngineError::malformed(
                section,
                index,
                format!("type id {} has more than one mass", id),
            ));
        }
    }

    debug!(
        "Read {} mass(es), {} carrying a symbol comment",
        masses.len(),
        symbols.len()
    );
    Ok((masses, symbols))
}

/// The `N atom types` count declared in the file header, if present.
///
/// Only lines before `first_section` are searched, so section bodies are never mistaken
/// for header lines.
pub fn read_declared_type_count(document: &Document, first_section: Option<usize>) -> Option<usize> {
    let limit = first_section.unwrap_or(document.len());
    document
        .lines()
        .take(limit)
        .find_map(|line| ATOM_TYPES_LINE.captures(line))
        .and_then(|caps| caps[1].parse().ok())
}
