use crate::core::models::document::Document;
use crate::core::models::section::{SectionKind, SectionSpan};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// The first line of a data file is a free-form title and never a section header.
const FIRST_HEADER_CANDIDATE: usize = 1;

/// Index of the first header line of `kind`, or `None` if the document has no such section.
pub fn find_section(document: &Document, kind: SectionKind) -> Option<usize> {
    document
        .lines()
        .enumerate()
        .skip(FIRST_HEADER_CANDIDATE)
        .find(|(_, line)| kind.matches(line))
        .map(|(index, _)| index)
}

/// Header positions of every known section, collected in a single pass.
///
/// Only the first header of each kind is recorded; later duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionIndex {
    headers: BTreeMap<SectionKind, usize>,
}

impl SectionIndex {
    pub fn scan(document: &Document) -> Self {
        let mut headers = BTreeMap::new();
        for (index, line) in document.lines().enumerate().skip(FIRST_HEADER_CANDIDATE) {
            for kind in SectionKind::ALL {
                if headers.contains_key(&kind) || !kind.matches(line) {
                    continue;
                }
                trace!(section = %kind, line = index + 1, "Found section header");
                headers.insert(kind, index);
                break;
            }
        }
        debug!("Located {} known section(s): {:?}", headers.len(), headers);
        Self { headers }
    }

    pub fn header(&self, kind: SectionKind) -> Option<usize> {
        self.headers.get(&kind).copied()
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.headers.contains_key(&kind)
    }

    pub fn span(&self, document: &Document, kind: SectionKind) -> Option<SectionSpan> {
        self.header(kind)
            .map(|header| SectionSpan::resolve(document, kind, header))
    }

    /// The first header line of any known section. Lines before it form the file header.
    pub fn first_header(&self) -> Option<usize> {
        self.headers.values().min().copied()
    }
}
