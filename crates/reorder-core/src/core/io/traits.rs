use crate::core::models::document::Document;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing line-oriented data files.
///
/// Implementors decide how raw bytes become a [`Document`] and back. The path-based
/// helpers are provided on top of the reader/writer methods.
pub trait DataFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a whole document from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content cannot be represented as text.
    fn read_from(reader: &mut impl Read) -> Result<Document, Self::Error>;

    /// Writes a document to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(document: &Document, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Document, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a document to a file path as a single replace.
    ///
    /// The content is written to a temporary file in the destination directory and then
    /// renamed over `path`, so an existing file is either left untouched or fully replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written, or persisted.
    fn write_to_path<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), Self::Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            Self::write_to(document, &mut writer)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
