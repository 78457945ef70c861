//! Recipe documents and list payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};

/// A recipe: any JSON object, keyed by its `id` attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(Map<String, Value>);

impl Recipe {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a recipe from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(StoreError::InvalidRecipe(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One page of a recipe scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipePage {
    pub items: Vec<Recipe>,
    /// Opaque key to pass back to continue the scan. `None` on the last page.
    pub last_evaluated_key: Option<String>,
}

/// Body of `GET /recipes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Recipe>,
    pub metadata: ListMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMetadata {
    pub last_evaluated_key: Option<String>,
}

impl From<RecipePage> for ListResponse {
    fn from(page: RecipePage) -> Self {
        Self {
            data: page.items,
            metadata: ListMetadata { last_evaluated_key: page.last_evaluated_key },
        }
    }
}

/// Query string of `GET /recipes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub last_evaluated_key: Option<String>,
}

impl ListQuery {
    /// The start key, treating empty and literal `null` as absent.
    pub fn start_key(&self) -> Option<&str> {
        self.last_evaluated_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != "null")
    }
}
