//! Storage backend trait.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::model::{Recipe, RecipePage};

/// A storage backend for recipes.
///
/// Implementations must be safe for concurrent use from request handlers.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Scan recipes in key order, continuing after `start_key` when given.
    ///
    /// `start_key` is the `last_evaluated_key` of a previous page. The
    /// returned page carries its own key only when more recipes remain.
    async fn list(&self, start_key: Option<&str>) -> Result<RecipePage>;

    /// Fetch a recipe by ID.
    async fn get(&self, id: &str) -> Result<Option<Recipe>>;

    /// Store a recipe, replacing any recipe with the same ID.
    ///
    /// A recipe without an `id` is assigned a generated one.
    async fn create(&self, recipe: Recipe) -> Result<Recipe>;

    /// Set the given attributes on an existing recipe.
    ///
    /// The `id` attribute is never changed. Returns `None` when no recipe has
    /// this ID.
    async fn update(&self, id: &str, fields: Map<String, Value>) -> Result<Option<Recipe>>;

    /// Delete a recipe. Returns whether one existed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
