use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to open file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
