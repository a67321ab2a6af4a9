use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML document: {message}")]
    MalformedDocument { message: String },

    #[error("No altimetry data could be extracted from the XML document")]
    MissingAltimetryData,

    #[error("Malformed numeric value in <{field}>: {value:?}")]
    MalformedNumericValue { field: String, value: String },

    #[error("No coordinates could be extracted from the XML document. Check element names and namespaces")]
    MissingCoordinates,
}

impl From<roxmltree::Error> for Error {
    fn from(value: roxmltree::Error) -> Self {
        Self::MalformedDocument {
            message: value.to_string(),
        }
    }
}
