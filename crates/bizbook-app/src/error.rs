use std::path::PathBuf;

use thiserror::Error;

use crate::import::UploadRejection;

/// Application-level errors (import pipeline)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    UploadRejected(#[from] UploadRejection),

    #[error(transparent)]
    VcfError(#[from] bizbook_vcf::error::VcfError),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
