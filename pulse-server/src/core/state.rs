use std::sync::Arc;

use crate::core::Config;
use crate::store::{DataStore, sample};

/// Server state: shared handle to config and the in-memory dataset
///
/// Cloning is shallow: the store lives behind an `Arc`, so every
/// handler sees the same collections. Tests construct the state with a
/// fixture dataset instead of the generated one (the store is an
/// injectable component, not a global).
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// In-memory dataset
    pub store: Arc<DataStore>,
}

impl ServerState {
    /// Create server state around an existing store
    pub fn with_store(config: Config, store: Arc<DataStore>) -> Self {
        Self { config, store }
    }

    /// Initialize server state with the seeded sample dataset
    pub fn initialize(config: &Config) -> Self {
        let dataset = sample::generate(config.sample_seed, config.sample_feedback_count);
        tracing::info!(
            seed = config.sample_seed,
            feedback = dataset.feedback.len(),
            alerts = dataset.alerts.len(),
            "Sample dataset generated"
        );
        Self::with_store(config.clone(), Arc::new(DataStore::from_dataset(dataset)))
    }

    /// Access the shared store
    pub fn store(&self) -> &DataStore {
        &self.store
    }
}
