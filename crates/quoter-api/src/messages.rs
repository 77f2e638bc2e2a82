use serde::{Deserialize, Serialize};

use quoter_types::{Quote, QuoteResult};

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Request body for saving a quote. The filename defaults to the one
/// recorded in the results payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveQuoteRequest {
    #[serde(default)]
    pub filename: Option<String>,
    pub results: QuoteResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteListResponse {
    pub quotes: Vec<Quote>,
}
