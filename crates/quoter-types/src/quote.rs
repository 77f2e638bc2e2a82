use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::AnalysisResult;
use crate::pricing::Pricing;

/// Combined analysis + pricing payload returned by the analyze endpoint and
/// embedded verbatim in saved quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Original upload filename.
    pub filename: String,
    /// Upload size in bytes.
    pub file_size_bytes: u64,
    pub analysis: AnalysisResult,
    pub pricing: Pricing,
}

/// Identifier assigned when a quote is saved. Timestamp-derived with a
/// random suffix so two saves within the same millisecond stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub String);

impl QuoteId {
    pub fn generate(at: DateTime<Utc>) -> Self {
        let entropy = Uuid::new_v4().simple().to_string();
        QuoteId(format!("q{}-{}", at.timestamp_millis(), &entropy[..8]))
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A saved, immutable snapshot of one pricing computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    /// Creation time, serialized as ISO-8601.
    pub timestamp: DateTime<Utc>,
    pub filename: String,
    pub results: QuoteResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_timestamped() {
        let at = Utc::now();
        let a = QuoteId::generate(at);
        let b = QuoteId::generate(at);
        assert_ne!(a, b);
        assert!(a.0.starts_with(&format!("q{}", at.timestamp_millis())));
    }
}
