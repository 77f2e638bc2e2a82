use chrono::Utc;

use quoter_types::{Quote, QuoteId, QuoteResult};

use crate::errors::StoreError;

/// The storage contract for saved quotes.
///
/// Deliberately storage-agnostic: the in-memory backend below is the
/// reference implementation, and a database- or file-backed one can
/// substitute without the callers noticing.
pub trait QuoteRepository {
    /// Persist a new quote. Always succeeds; the repository stamps the id
    /// and creation timestamp.
    fn save(&mut self, filename: String, results: QuoteResult) -> QuoteId;

    /// All quotes in insertion order. Presentation layers are free to
    /// re-sort by timestamp.
    fn list(&self) -> Vec<&Quote>;

    fn find(&self, id: &QuoteId) -> Result<&Quote, StoreError>;

    /// Remove a quote if present. Returns whether anything was removed;
    /// deleting an absent id is a no-op, not an error.
    fn delete(&mut self, id: &QuoteId) -> bool;
}

/// Vec-backed quote storage.
#[derive(Debug, Default)]
pub struct InMemoryQuotes {
    quotes: Vec<Quote>,
}

impl InMemoryQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository from previously persisted quotes.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

impl QuoteRepository for InMemoryQuotes {
    fn save(&mut self, filename: String, results: QuoteResult) -> QuoteId {
        let timestamp = Utc::now();
        let id = QuoteId::generate(timestamp);
        self.quotes.push(Quote {
            id: id.clone(),
            timestamp,
            filename,
            results,
        });
        id
    }

    fn list(&self) -> Vec<&Quote> {
        self.quotes.iter().collect()
    }

    fn find(&self, id: &QuoteId) -> Result<&Quote, StoreError> {
        self.quotes
            .iter()
            .find(|quote| &quote.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    fn delete(&mut self, id: &QuoteId) -> bool {
        let before = self.quotes.len();
        self.quotes.retain(|quote| &quote.id != id);
        self.quotes.len() != before
    }
}
