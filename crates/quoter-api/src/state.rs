use std::sync::{Arc, Mutex};

use pricing_engine::{EstimatorConfig, MaterialCatalog, PricingConfig};
use quote_store::{InMemoryQuotes, QuoteRepository};

/// Request-independent context shared by every handler.
///
/// The catalog and configs are read-only after startup; the quote
/// repository is the only mutable piece and sits behind a mutex. Everything
/// is passed in explicitly, so there are no process-wide singletons.
pub struct AppState {
    pub catalog: MaterialCatalog,
    pub pricing: PricingConfig,
    pub estimator: EstimatorConfig,
    pub quotes: Mutex<Box<dyn QuoteRepository + Send>>,
}

impl AppState {
    /// Stock catalog, default rates, empty in-memory quote repository.
    pub fn new() -> Arc<Self> {
        Self::with_repository(Box::new(InMemoryQuotes::new()))
    }

    /// Same defaults over a caller-supplied quote backend.
    pub fn with_repository(repository: Box<dyn QuoteRepository + Send>) -> Arc<Self> {
        Arc::new(Self {
            catalog: MaterialCatalog::default(),
            pricing: PricingConfig::default(),
            estimator: EstimatorConfig::default(),
            quotes: Mutex::new(repository),
        })
    }
}
