//! Recipe CRUD API.
//!
//! Recipes are schemaless JSON objects keyed by their `id` attribute. Storage
//! sits behind the [`RecipeStore`] trait; [`InMemoryRecipeStore`] is the
//! bundled backend. [`api_router`] exposes the store over HTTP:
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/hello` | health check |
//! | GET, POST | `/recipes` | paginated scan, create |
//! | GET, PUT, DELETE | `/recipes/{id}` | read, update, delete |

pub mod error;
pub mod inmemory;
pub mod model;
pub mod routes;
pub mod store;

pub use error::{ApiError, Result, StoreError};
pub use inmemory::{DEFAULT_PAGE_SIZE, InMemoryRecipeStore};
pub use model::{ListMetadata, ListQuery, ListResponse, Recipe, RecipePage};
pub use routes::{ApiState, api_router, not_found};
pub use store::RecipeStore;
