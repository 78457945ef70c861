//! In-memory recipe store.
//!
//! [`InMemoryRecipeStore`] keeps recipes in a `BTreeMap` behind a
//! `tokio::sync::RwLock`, so scans run in ID order and pagination keys stay
//! stable across pages. Suitable for development, tests and single-process
//! deployments.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::model::{Recipe, RecipePage};
use crate::store::RecipeStore;

/// Recipes returned per scan page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Decoded form of a pagination key.
#[derive(Debug, Serialize, Deserialize)]
struct ScanKey {
    id: String,
}

/// A recipe store held in process memory.
///
/// # Example
///
/// ```rust,ignore
/// use recipe_api::{InMemoryRecipeStore, RecipeStore};
///
/// let store = InMemoryRecipeStore::new().with_page_size(20);
/// let page = store.list(None).await?;
/// ```
#[derive(Debug)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<BTreeMap<String, Recipe>>,
    page_size: usize,
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self { recipes: RwLock::new(BTreeMap::new()), page_size: DEFAULT_PAGE_SIZE }
    }
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of recipes per scan page (at least one).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

fn decode_start_key(raw: &str) -> Result<String> {
    serde_json::from_str::<ScanKey>(raw)
        .map(|key| key.id)
        .map_err(|e| StoreError::InvalidStartKey(e.to_string()))
}

fn encode_start_key(id: &str) -> Result<String> {
    serde_json::to_string(&ScanKey { id: id.to_string() }).map_err(|e| StoreError::Backend {
        backend: "InMemory".to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn list(&self, start_key: Option<&str>) -> Result<RecipePage> {
        let start = start_key.map(decode_start_key).transpose()?;
        let lower = match &start {
            Some(id) => Bound::Excluded(id.as_str()),
            None => Bound::Unbounded,
        };

        let recipes = self.recipes.read().await;
        let mut scanned = recipes.range::<str, _>((lower, Bound::Unbounded));
        let items: Vec<Recipe> =
            scanned.by_ref().take(self.page_size).map(|(_, recipe)| recipe.clone()).collect();

        let last_evaluated_key = match (scanned.next(), items.last()) {
            (Some(_), Some(last)) => last.id().map(encode_start_key).transpose()?,
            _ => None,
        };

        tracing::debug!(count = items.len(), more = last_evaluated_key.is_some(), "scanned recipes");
        Ok(RecipePage { items, last_evaluated_key })
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self.recipes.read().await.get(id).cloned())
    }

    async fn create(&self, mut recipe: Recipe) -> Result<Recipe> {
        let id = match recipe.get("id") {
            None => None,
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(_) => {
                return Err(StoreError::InvalidRecipe("id must be a non-empty string".to_string()));
            }
        };
        let id = match id {
            Some(id) => id,
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                recipe.fields_mut().insert("id".to_string(), Value::String(id.clone()));
                id
            }
        };

        self.recipes.write().await.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: &str, mut fields: Map<String, Value>) -> Result<Option<Recipe>> {
        fields.remove("id");
        if fields.is_empty() {
            return Err(StoreError::InvalidRecipe("no attributes to update".to_string()));
        }

        let mut recipes = self.recipes.write().await;
        let Some(recipe) = recipes.get_mut(id) else {
            return Ok(None);
        };
        recipe.fields_mut().extend(fields);
        Ok(Some(recipe.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.recipes.write().await.remove(id).is_some())
    }
}
