use crate::{Error, Result};
use std::path::Path;

/// Default input file name used by every converter when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "circuitoEsquema.xml";

/// Reads a circuit document from disk.
///
/// A missing file is reported as [`Error::InputNotFound`]; any other read failure keeps the
/// underlying I/O error.
pub fn read_document_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
