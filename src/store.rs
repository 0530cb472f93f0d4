use crate::error::PantryError;
use crate::model::{NewRecipe, Recipe};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Access to the recipe collection resource.
///
/// One attempt per call: no retries and no timeout. A failed call is surfaced to the
/// caller, who decides whether to try again.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Fetch every recipe in the collection. An empty collection is not an error.
    async fn list_all(&self) -> Result<Vec<Recipe>, PantryError>;

    /// Create a recipe and return it with its server-assigned id
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, PantryError>;
}

/// `RecipeStore` backed by a REST collection (`GET <base>` / `POST <base>`)
pub struct HttpRecipeStore {
    client: Client,
    base_url: String,
}

impl HttpRecipeStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        HttpRecipeStore {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecipeStore for HttpRecipeStore {
    async fn list_all(&self) -> Result<Vec<Recipe>, PantryError> {
        debug!("GET {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(PantryError::fetch_transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Listing recipes failed with {}", status);
            return Err(PantryError::fetch_status(status));
        }

        let recipes: Vec<Recipe> = response
            .json()
            .await
            .map_err(PantryError::fetch_transport)?;
        info!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, PantryError> {
        debug!("POST {} ({})", self.base_url, recipe.title);
        let response = self
            .client
            .post(&self.base_url)
            .header(CONTENT_TYPE, "application/json")
            .json(recipe)
            .send()
            .await
            .map_err(PantryError::create_transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Creating recipe failed with {}", status);
            return Err(PantryError::create_status(status));
        }

        let created: Recipe = response
            .json()
            .await
            .map_err(PantryError::create_transport)?;
        info!("Created recipe {} ({})", created.id, created.title);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeId;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn tacos() -> NewRecipe {
        NewRecipe {
            title: "Smoky tofu tacos".to_string(),
            cuisine: "Fusion".to_string(),
            time: "25 min".to_string(),
            difficulty: "Easy".to_string(),
            servings: "4".to_string(),
            tags: vec!["vegan".to_string(), "weeknight".to_string()],
            ingredients: vec!["tofu".to_string(), "lime".to_string()],
            instructions: "Sear tofu, assemble.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_all() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B", "tags": ["quick"]}]"#)
            .create();

        let store = HttpRecipeStore::new(format!("{}/recipes", server.url()));
        let recipes = store.list_all().await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, RecipeId::Number(1));
        assert_eq!(recipes[1].tags, vec!["quick".to_string()]);
        mock.assert();
    }

    #[tokio::test]
    async fn test_list_all_empty_is_ok() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create();

        let store = HttpRecipeStore::new(format!("{}/recipes", server.url()));
        assert!(store.list_all().await.unwrap().is_empty());
        mock.assert();
    }

    #[tokio::test]
    async fn test_list_all_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes")
            .with_status(500)
            .with_body("boom")
            .create();

        let store = HttpRecipeStore::new(format!("{}/recipes", server.url()));
        let err = store.list_all().await.unwrap_err();

        assert!(matches!(err, PantryError::FetchFailure(_)));
        assert_eq!(err.to_string(), "API unavailable (HTTP 500)");
        mock.assert();
    }

    #[tokio::test]
    async fn test_list_all_invalid_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/recipes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"not": "a list"}"#)
            .create();

        let store = HttpRecipeStore::new(format!("{}/recipes", server.url()));
        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, PantryError::FetchFailure(_)));
    }

    #[tokio::test]
    async fn test_create_posts_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/recipes")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "title": "Smoky tofu tacos",
                "cuisine": "Fusion",
                "time": "25 min",
                "difficulty": "Easy",
                "servings": "4",
                "tags": ["vegan", "weeknight"],
                "ingredients": ["tofu", "lime"],
                "instructions": "Sear tofu, assemble."
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": "a1b2", "title": "Smoky tofu tacos", "servings": "4",
                    "tags": ["vegan", "weeknight"], "ingredients": ["tofu", "lime"],
                    "instructions": "Sear tofu, assemble."}"#,
            )
            .create();

        let store = HttpRecipeStore::new(format!("{}/recipes", server.url()));
        let created = store.create(&tacos()).await.unwrap();

        assert_eq!(created.id, RecipeId::Text("a1b2".to_string()));
        assert_eq!(created.title, "Smoky tofu tacos");
        mock.assert();
    }

    #[tokio::test]
    async fn test_create_rejected() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/recipes")
            .with_status(422)
            .with_body(r#"{"error": "invalid"}"#)
            .create();

        let store = HttpRecipeStore::new(format!("{}/recipes", server.url()));
        let err = store.create(&tacos()).await.unwrap_err();

        assert!(matches!(err, PantryError::CreateFailure(_)));
        mock.assert();
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let store = HttpRecipeStore::new("http://127.0.0.1:1/recipes");

        assert!(matches!(
            store.list_all().await,
            Err(PantryError::FetchFailure(_))
        ));
        assert!(matches!(
            store.create(&tacos()).await,
            Err(PantryError::CreateFailure(_))
        ));
    }
}
