mod memory;
mod pipeline;

// Re-export public API
pub use memory::{load_documents, MemoryStore};
pub use pipeline::{make_pipeline, Filter, Pipeline, Stage};

use crate::config::ResolvedConfig;
use crate::errors::AppResult;
use tracing::info;

/// Schema-less document as held by a store.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Insert/query interface of a document store.
pub trait DocumentStore {
    /// Appends `docs` to `database.collection`, creating both as needed.
    /// Returns the number of documents inserted.
    fn insert_many(
        &mut self,
        database: &str,
        collection: &str,
        docs: Vec<Document>,
    ) -> AppResult<usize>;

    /// Runs `pipeline` over `database.collection` and returns every match.
    fn aggregate(
        &self,
        database: &str,
        collection: &str,
        pipeline: &Pipeline,
    ) -> AppResult<Vec<Document>>;
}

/// Connects to the store at `address` and returns every document in the
/// configured collection where `config.match_field` exists.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be reached.
pub fn run_query(config: &ResolvedConfig, address: &str) -> AppResult<Vec<Document>> {
    let store = MemoryStore::connect(address, &config.database, &config.collection)?;
    let pipeline = make_pipeline(&config.match_field);

    info!(
        database = %config.database,
        collection = %config.collection,
        pipeline = %pipeline.to_json(),
        "Running aggregation"
    );

    let result = store.aggregate(&config.database, &config.collection, &pipeline)?;
    info!(matched = result.len(), "Aggregation completed");
    Ok(result)
}
