use super::{Document, DocumentStore, Pipeline};
use crate::constants::MEMORY_STORE_ADDRESS;
use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// In-process document store: databases hold named collections of
/// schema-less JSON documents kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    databases: BTreeMap<String, BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the store at `address` and loads it into `database.collection`.
    ///
    /// `memory:` yields an empty store. Any other address is treated as the
    /// path of a newline-delimited JSON file such as the one written by
    /// [`crate::parser::process_map`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the address cannot be opened or holds
    /// something other than a stream of JSON objects.
    pub fn connect(address: &str, database: &str, collection: &str) -> AppResult<Self> {
        let mut store = Self::new();
        if address == MEMORY_STORE_ADDRESS {
            return Ok(store);
        }

        let file = File::open(Path::new(address)).map_err(|e| {
            AppError::StoreError(format!("Failed to connect to store at {address}: {e}"))
        })?;
        let docs = load_documents(BufReader::new(file))
            .map_err(|e| AppError::StoreError(format!("Failed to load {address}: {e}")))?;
        let loaded = store.insert_many(database, collection, docs)?;

        info!(
            address,
            database,
            collection,
            documents = loaded,
            "Connected to document store"
        );
        Ok(store)
    }

    pub fn collection_len(&self, database: &str, collection: &str) -> usize {
        self.databases
            .get(database)
            .and_then(|db| db.get(collection))
            .map_or(0, Vec::len)
    }
}

impl DocumentStore for MemoryStore {
    fn insert_many(
        &mut self,
        database: &str,
        collection: &str,
        docs: Vec<Document>,
    ) -> AppResult<usize> {
        let count = docs.len();
        self.databases
            .entry(database.to_string())
            .or_default()
            .entry(collection.to_string())
            .or_default()
            .extend(docs);
        Ok(count)
    }

    fn aggregate(
        &self,
        database: &str,
        collection: &str,
        pipeline: &Pipeline,
    ) -> AppResult<Vec<Document>> {
        let docs = self
            .databases
            .get(database)
            .and_then(|db| db.get(collection))
            .map(|docs| pipeline.apply(docs))
            .unwrap_or_default();
        Ok(docs)
    }
}

/// Reads a stream of JSON objects separated by whitespace.
///
/// Accepts both compact (one per line) and pretty-printed output.
pub fn load_documents<R: BufRead>(reader: R) -> AppResult<Vec<Document>> {
    let mut docs = Vec::new();
    for value in serde_json::Deserializer::from_reader(reader).into_iter::<Value>() {
        match value? {
            Value::Object(doc) => docs.push(doc),
            other => {
                return Err(AppError::InvalidInput(format!(
                    "Expected a JSON object, found {other}"
                )))
            }
        }
    }
    Ok(docs)
}
