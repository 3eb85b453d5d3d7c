use thiserror::Error;

/// File-level VCF errors. Any of these rejects the whole upload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VcfError {
    #[error("Invalid VCF content provided")]
    InvalidInput,

    #[error("No valid vCards found in the file")]
    NoCards,

    #[error("No valid contacts found in VCF file")]
    NoContacts,
}

pub type VcfResult<T> = std::result::Result<T, VcfError>;
