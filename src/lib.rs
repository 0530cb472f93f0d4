pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod search;
pub mod selection;
pub mod session;
pub mod store;
pub mod view;
pub mod workspace;

pub use config::PantryConfig;
pub use error::PantryError;
pub use form::{split_list, Draft, DraftField};
pub use model::{NewRecipe, Recipe, RecipeId};
pub use search::filter;
pub use selection::Selection;
pub use store::{HttpRecipeStore, RecipeStore};
pub use workspace::Workspace;

/// Open a workspace against `api_url` and load the recipe list
pub async fn open_workspace(api_url: &str) -> (Workspace, HttpRecipeStore) {
    let store = HttpRecipeStore::new(api_url);
    let mut workspace = Workspace::new(api_url);
    workspace.load(&store).await;
    (workspace, store)
}
