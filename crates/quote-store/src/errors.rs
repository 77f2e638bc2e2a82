use quoter_types::QuoteId;

/// Errors from quote lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("quote not found: {id}")]
    NotFound { id: QuoteId },
}

/// Errors during quote ledger loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QuoteFileError {
    #[error("failed to parse quote ledger: {0}")]
    Parse(String),

    #[error("unknown ledger format: {0}")]
    UnknownFormat(String),

    #[error("ledger version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },
}
