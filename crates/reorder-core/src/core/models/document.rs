use std::ops::Range;
use thiserror::Error;

/// Line terminator convention used when generating new lines for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A contiguous index range of a document together with the lines that replace it.
///
/// An empty `range` (`start == end`) inserts `replacement` before line `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub range: Range<usize>,
    pub replacement: Vec<String>,
}

impl Splice {
    pub fn new(range: Range<usize>, replacement: Vec<String>) -> Self {
        Self { range, replacement }
    }

    pub fn insert(at: usize, lines: Vec<String>) -> Self {
        Self::new(at..at, lines)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("Splice range {start}..{end} is out of bounds for a document of {len} lines")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("Splice ranges {first:?} and {second:?} overlap")]
    Overlap {
        first: Range<usize>,
        second: Range<usize>,
    },
}

/// An ordered buffer of raw text lines.
///
/// Every line keeps its own terminator (`"\n"`, `"\r\n"`, or nothing for a final unterminated
/// line), so concatenating the lines reproduces the source text exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn is_blank(&self, index: usize) -> bool {
        self.line(index).is_none_or(is_blank)
    }

    /// Overwrites a single line in place. Returns the previous content, or `None` if the
    /// index is past the end of the document.
    pub fn replace_line(&mut self, index: usize, content: String) -> Option<String> {
        self.lines
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, content))
    }

    /// The terminator of the first terminated line, defaulting to `\n`.
    pub fn line_ending(&self) -> LineEnding {
        self.lines
            .iter()
            .find(|line| line.ends_with('\n'))
            .map_or(LineEnding::Lf, |line| {
                if line.ends_with("\r\n") {
                    LineEnding::CrLf
                } else {
                    LineEnding::Lf
                }
            })
    }

    /// Applies a set of non-overlapping splices.
    ///
    /// Ranges always refer to the document as it was before any splice in the set was
    /// applied; splices run from the bottom of the document upwards so that earlier
    /// indices are never shifted by later ones.
    pub fn apply_splices(&mut self, mut splices: Vec<Splice>) -> Result<(), SpliceError> {
        let len = self.lines.len();
        for splice in &splices {
            if splice.range.start > splice.range.end || splice.range.end > len {
                return Err(SpliceError::OutOfBounds {
                    start: splice.range.start,
                    end: splice.range.end,
                    len,
                });
            }
        }

        splices.sort_by(|a, b| {
            b.range
                .start
                .cmp(&a.range.start)
                .then(b.range.end.cmp(&a.range.end))
        });
        for pair in splices.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            let touches = lower.range.end > upper.range.start
                || (lower.range.start == upper.range.start
                    && (lower.range.is_empty() == upper.range.is_empty()));
            if touches {
                return Err(SpliceError::Overlap {
                    first: lower.range.clone(),
                    second: upper.range.clone(),
                });
            }
        }

        for splice in splices {
            self.lines.splice(splice.range, splice.replacement);
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Splits a raw line into its content and its terminator.
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_round_trips_exactly() {
        let text = "title\r\n\n  3 atoms\nAtoms # atomic\n\n1 1 0.0 0.0 0.0";
        let doc = Document::from_text(text);
        assert_eq!(doc.len(), 6);
        assert_eq!(doc.line(5), Some("1 1 0.0 0.0 0.0"));
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn empty_text_yields_empty_document() {
        let doc = Document::from_text("");
        assert!(doc.is_empty());
        assert_eq!(doc.to_text(), "");
    }

    #[test]
    fn line_ending_detects_crlf_and_defaults_to_lf() {
        assert_eq!(
            Document::from_text("a\r\nb\r\n").line_ending(),
            LineEnding::CrLf
        );
        assert_eq!(Document::from_text("a\nb").line_ending(), LineEnding::Lf);
        assert_eq!(Document::from_text("a").line_ending(), LineEnding::Lf);
    }

    #[test]
    fn split_terminator_handles_all_terminators() {
        assert_eq!(split_terminator("1 2\r\n"), ("1 2", "\r\n"));
        assert_eq!(split_terminator("1 2\n"), ("1 2", "\n"));
        assert_eq!(split_terminator("1 2"), ("1 2", ""));
    }

    #[test]
    fn blank_and_comment_detection() {
        assert!(is_blank("   \t\r\n"));
        assert!(!is_blank(" x\n"));
        assert!(is_comment("   # note\n"));
        assert!(!is_comment("1 2 # note\n"));
    }

    #[test]
    fn replace_line_returns_previous_content() {
        let mut doc = Document::from_text("a\nb\n");
        assert_eq!(doc.replace_line(1, "c\n".into()), Some("b\n".to_string()));
        assert_eq!(doc.replace_line(5, "x\n".into()), None);
        assert_eq!(doc.to_text(), "a\nc\n");
    }

    #[test]
    fn apply_splices_uses_original_indices() {
        let mut doc = Document::from_text("0\n1\n2\n3\n4\n");
        doc.apply_splices(vec![
            Splice::new(1..2, vec!["a\n".into(), "b\n".into(), "c\n".into()]),
            Splice::new(3..5, vec!["d\n".into()]),
            Splice::insert(0, vec!["top\n".into()]),
        ])
        .unwrap();
        assert_eq!(doc.to_text(), "top\n0\na\nb\nc\n2\nd\n");
    }

    #[test]
    fn apply_splices_rejects_overlapping_ranges() {
        let mut doc = Document::from_text("0\n1\n2\n3\n");
        let result = doc.apply_splices(vec![
            Splice::new(0..2, vec![]),
            Splice::new(1..3, vec![]),
        ]);
        assert!(matches!(result, Err(SpliceError::Overlap { .. })));
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn apply_splices_rejects_out_of_bounds_ranges() {
        let mut doc = Document::from_text("0\n");
        let result = doc.apply_splices(vec![Splice::new(0..3, vec![])]);
        assert_eq!(
            result,
            Err(SpliceError::OutOfBounds {
                start: 0,
                end: 3,
                len: 1
            })
        );
    }
}
