use super::document::Document;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// The named sections of a LAMMPS data file that take part in type renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    AtomTypeLabels,
    Masses,
    Atoms,
    PairCoeffs,
    PairIJCoeffs,
    BondCoeffs,
    AngleCoeffs,
    DihedralCoeffs,
    ImproperCoeffs,
}

static HEADER_PATTERNS: Lazy<Vec<(SectionKind, Regex)>> = Lazy::new(|| {
    SectionKind::ALL
        .iter()
        .map(|&kind| {
            let regex = Regex::new(kind.header_pattern())
                .expect("Section header patterns must compile");
            (kind, regex)
        })
        .collect()
});

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::AtomTypeLabels,
        SectionKind::Masses,
        SectionKind::Atoms,
        SectionKind::PairCoeffs,
        SectionKind::PairIJCoeffs,
        SectionKind::BondCoeffs,
        SectionKind::AngleCoeffs,
        SectionKind::DihedralCoeffs,
        SectionKind::ImproperCoeffs,
    ];

    /// Interaction-coefficient sections, in the order they are remapped.
    pub const COEFFS: [SectionKind; 6] = [
        SectionKind::PairCoeffs,
        SectionKind::PairIJCoeffs,
        SectionKind::BondCoeffs,
        SectionKind::AngleCoeffs,
        SectionKind::DihedralCoeffs,
        SectionKind::ImproperCoeffs,
    ];

    /// Canonical header text, as written by LAMMPS `write_data`.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::AtomTypeLabels => "Atom Type Labels",
            SectionKind::Masses => "Masses",
            SectionKind::Atoms => "Atoms",
            SectionKind::PairCoeffs => "Pair Coeffs",
            SectionKind::PairIJCoeffs => "PairIJ Coeffs",
            SectionKind::BondCoeffs => "Bond Coeffs",
            SectionKind::AngleCoeffs => "Angle Coeffs",
            SectionKind::DihedralCoeffs => "Dihedral Coeffs",
            SectionKind::ImproperCoeffs => "Improper Coeffs",
        }
    }

    fn header_pattern(&self) -> &'static str {
        match self {
            SectionKind::AtomTypeLabels => r"(?i)^\s*Atom\s+Type\s+Labels\b",
            SectionKind::Masses => r"(?i)^\s*Masses\b",
            SectionKind::Atoms => r"(?i)^\s*Atoms\b",
            SectionKind::PairCoeffs => r"(?i)^\s*Pair\s+Coeffs\b",
            SectionKind::PairIJCoeffs => r"(?i)^\s*PairIJ\s+Coeffs\b",
            SectionKind::BondCoeffs => r"(?i)^\s*Bond\s+Coeffs\b",
            SectionKind::AngleCoeffs => r"(?i)^\s*Angle\s+Coeffs\b",
            SectionKind::DihedralCoeffs => r"(?i)^\s*Dihedral\s+Coeffs\b",
            SectionKind::ImproperCoeffs => r"(?i)^\s*Improper\s+Coeffs\b",
        }
    }

    /// Whether `line` is a header line for this section.
    pub fn matches(&self, line: &str) -> bool {
        HEADER_PATTERNS
            .iter()
            .find(|(kind, _)| kind == self)
            .is_some_and(|(_, regex)| regex.is_match(line))
    }

    /// Columns holding a type id in the rows of a coefficient section.
    ///
    /// Column indices count every whitespace-separated token of a row, starting with the
    /// leading one. `PairIJ Coeffs` rows reference two types (`i j ...`); only the second
    /// column is remapped unless `pair_ij_both` is set. Sections whose type column is not
    /// fixed by the format return an empty slice.
    pub fn type_columns(&self, pair_ij_both: bool) -> &'static [usize] {
        match self {
            SectionKind::PairCoeffs
            | SectionKind::BondCoeffs
            | SectionKind::AngleCoeffs
            | SectionKind::DihedralCoeffs
            | SectionKind::ImproperCoeffs => &[0],
            SectionKind::PairIJCoeffs if pair_ij_both => &[0, 1],
            SectionKind::PairIJCoeffs => &[1],
            SectionKind::AtomTypeLabels | SectionKind::Masses | SectionKind::Atoms => &[],
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The line extent of one section inside a [`Document`].
///
/// `rows` covers the contiguous run of non-blank lines that follows the header and any
/// blank lines directly after it. It is empty only when nothing but blank lines follow the
/// header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub kind: SectionKind,
    pub header: usize,
    pub rows: Range<usize>,
}

impl SectionSpan {
    pub fn resolve(document: &Document, kind: SectionKind, header: usize) -> Self {
        let len = document.len();
        let mut start = (header + 1).min(len);
        while start < len && document.is_blank(start) {
            start += 1;
        }
        let mut end = start;
        while end < len && !document.is_blank(end) {
            end += 1;
        }
        Self {
            kind,
            header,
            rows: start..end,
        }
    }

    /// Header through the last data row. A rewrite replaces exactly this range.
    pub fn extent(&self) -> Range<usize> {
        self.header..self.rows.end
    }

    /// Whether the section runs to the end of the document with no trailing blank line.
    pub fn ends_document(&self, document: &Document) -> bool {
        self.rows.end >= document.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_patterns_are_case_insensitive_and_whitespace_tolerant() {
        assert!(SectionKind::PairCoeffs.matches("Pair Coeffs # eam/alloy\n"));
        assert!(SectionKind::PairCoeffs.matches("  pair   coeffs\n"));
        assert!(SectionKind::AtomTypeLabels.matches("Atom\tType  Labels\n"));
        assert!(SectionKind::Atoms.matches("Atoms # atomic\n"));
        assert!(SectionKind::Masses.matches("MASSES\n"));
    }

    #[test]
    fn header_patterns_reject_lookalike_lines() {
        assert!(!SectionKind::Atoms.matches("8 atoms\n"));
        assert!(!SectionKind::Atoms.matches("Atomsx\n"));
        assert!(!SectionKind::AtomTypeLabels.matches("2 atom types\n"));
        assert!(!SectionKind::BondCoeffs.matches("BondBond Coeffs\n"));
        assert!(!SectionKind::PairCoeffs.matches("PairIJ Coeffs\n"));
        assert!(!SectionKind::PairIJCoeffs.matches("Pair Coeffs\n"));
    }

    #[test]
    fn type_columns_follow_section_layout() {
        assert_eq!(SectionKind::PairCoeffs.type_columns(false), &[0]);
        assert_eq!(SectionKind::PairIJCoeffs.type_columns(false), &[1]);
        assert_eq!(SectionKind::PairIJCoeffs.type_columns(true), &[0, 1]);
        assert_eq!(SectionKind::ImproperCoeffs.type_columns(true), &[0]);
        assert!(SectionKind::Atoms.type_columns(false).is_empty());
    }

    #[test]
    fn resolve_skips_leading_blank_lines_and_stops_at_blank() {
        let doc = Document::from_text("Masses\n\n\n1 12.0\n2 1.0\n\nAtoms\n");
        let span = SectionSpan::resolve(&doc, SectionKind::Masses, 0);
        assert_eq!(span.rows, 3..5);
        assert_eq!(span.extent(), 0..5);
        assert!(!span.ends_document(&doc));
    }

    #[test]
    fn resolve_runs_to_end_of_document() {
        let doc = Document::from_text("Atoms\n\n1 1 0 0 0\n2 1 0 0 0");
        let span = SectionSpan::resolve(&doc, SectionKind::Atoms, 0);
        assert_eq!(span.rows, 2..4);
        assert!(span.ends_document(&doc));
    }

    #[test]
    fn resolve_handles_header_on_last_line() {
        let doc = Document::from_text("x\nAtoms\n");
        let span = SectionSpan::resolve(&doc, SectionKind::Atoms, 1);
        assert!(span.rows.is_empty());
        assert_eq!(span.rows.start, 2);
    }
}
