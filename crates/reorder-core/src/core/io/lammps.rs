use crate::core::io::traits::DataFile;
use crate::core::models::document::Document;
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LammpsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("File is not valid UTF-8 (first invalid byte at offset {offset})")]
    Encoding { offset: usize },
}

/// A LAMMPS data file (`read_data` / `write_data` format), handled as raw text.
pub struct LammpsDataFile;

impl DataFile for LammpsDataFile {
    type Error = LammpsError;

    fn read_from(reader: &mut impl Read) -> Result<Document, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(|e| LammpsError::Encoding {
            offset: e.utf8_error().valid_up_to(),
        })?;
        Ok(Document::from_text(&text))
    }

    fn write_to(document: &Document, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in document.lines() {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}
