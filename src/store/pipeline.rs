use super::Document;
use serde_json::{json, Map, Value};

/// Predicate on a single document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `{"<field>": {"$exists": <exists>}}`
    Exists { field: String, exists: bool },
}

impl Filter {
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::Exists { field, exists } => lookup(doc, field).is_some() == *exists,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Filter::Exists { field, exists } => {
                let mut filter = Map::new();
                filter.insert(field.clone(), json!({ "$exists": *exists }));
                Value::Object(filter)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Keeps documents satisfying the filter
    Match(Filter),
}

impl Stage {
    fn to_json(&self) -> Value {
        match self {
            Stage::Match(filter) => json!({ "$match": filter.to_json() }),
        }
    }
}

/// Ordered list of stages applied to a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs every stage over `docs`, keeping input order.
    pub fn apply<'a, I>(&self, docs: I) -> Vec<Document>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        docs.into_iter()
            .filter(|doc| {
                self.stages.iter().all(|stage| match stage {
                    Stage::Match(filter) => filter.matches(doc),
                })
            })
            .cloned()
            .collect()
    }

    /// Document-store JSON form, e.g. `[{"$match":{"NHD:way_id":{"$exists":true}}}]`.
    pub fn to_json(&self) -> Value {
        Value::Array(self.stages.iter().map(Stage::to_json).collect())
    }
}

/// Single-stage pipeline selecting documents where `field` exists.
pub fn make_pipeline(field: &str) -> Pipeline {
    Pipeline::new().stage(Stage::Match(Filter::Exists {
        field: field.to_string(),
        exists: true,
    }))
}

/// Resolves `path` in `doc`. A key that matches verbatim wins; otherwise the
/// path is split on `.` and walked through nested objects.
fn lookup<'a>(doc: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = doc.get(path) {
        return Some(value);
    }
    let (head, rest) = path.split_once('.')?;
    match doc.get(head)? {
        Value::Object(inner) => lookup(inner, rest),
        _ => None,
    }
}
