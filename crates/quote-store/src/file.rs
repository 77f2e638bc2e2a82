//! Versioned JSON format for a persisted quote collection.

use serde::{Deserialize, Serialize};

use quoter_types::Quote;

use crate::errors::QuoteFileError;

/// Current ledger format version.
pub const FORMAT_VERSION: u32 = 1;

const FORMAT_NAME: &str = "quote-ledger";

/// The top-level ledger structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLedger {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Saved quotes in insertion order.
    pub quotes: Vec<Quote>,
}

/// Serialize a quote collection to a pretty-printed JSON string.
pub fn save_quotes(quotes: &[Quote]) -> String {
    let ledger = QuoteLedger {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        quotes: quotes.to_vec(),
    };
    serde_json::to_string_pretty(&ledger).expect("Quote serialization should never fail")
}

/// Deserialize a quote collection from a JSON string.
///
/// Validates the format identifier and rejects ledgers written by a newer
/// version of this software.
pub fn load_quotes(json: &str) -> Result<Vec<Quote>, QuoteFileError> {
    let ledger: QuoteLedger =
        serde_json::from_str(json).map_err(|e| QuoteFileError::Parse(e.to_string()))?;

    if ledger.format != FORMAT_NAME {
        return Err(QuoteFileError::UnknownFormat(ledger.format));
    }

    if ledger.version > FORMAT_VERSION {
        return Err(QuoteFileError::FutureVersion {
            file_version: ledger.version,
            supported_version: FORMAT_VERSION,
        });
    }

    Ok(ledger.quotes)
}
