use crate::error::PantryError;
use crate::form::{Draft, DraftField};
use crate::model::{NewRecipe, Recipe, RecipeId};
use crate::search;
use crate::selection::Selection;
use crate::store::RecipeStore;
use log::{debug, info, warn};

/// State of one cookbook session and the transitions the user can trigger.
///
/// Network-bound actions come in `begin_*`/`finish_*` pairs so the in-flight state
/// (loading indicator, disabled submit) can be observed and rendered while the request
/// is pending. `load` and `submit` run both halves against a `RecipeStore`.
#[derive(Debug, Clone)]
pub struct Workspace {
    api_url: String,
    recipes: Vec<Recipe>,
    query: String,
    selection: Selection,
    draft: Draft,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

impl Workspace {
    pub fn new(api_url: impl Into<String>) -> Self {
        Workspace {
            api_url: api_url.into(),
            recipes: Vec::new(),
            query: String::new(),
            selection: Selection::default(),
            draft: Draft::default(),
            loading: false,
            saving: false,
            error: None,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Recipes matching the current query
    pub fn filtered(&self) -> Vec<&Recipe> {
        search::filter(&self.recipes, &self.query)
    }

    /// Recipe shown in the detail panel, recomputed on every call
    pub fn selected(&self) -> Option<&Recipe> {
        self.selection.resolve(&self.filtered())
    }

    /// Error text to show; hidden while the list is loading
    pub fn visible_error(&self) -> Option<&str> {
        if self.loading {
            None
        } else {
            self.error()
        }
    }

    pub fn shows_no_results(&self) -> bool {
        !self.loading && self.filtered().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.saving
    }

    pub fn begin_load(&mut self) {
        debug!("Loading recipes from {}", self.api_url);
        self.loading = true;
    }

    /// Commit the outcome of a list request. A failure keeps the current list.
    pub fn finish_load(&mut self, result: Result<Vec<Recipe>, PantryError>) {
        match result {
            Ok(recipes) => {
                self.recipes = Vec::with_capacity(recipes.len());
                for recipe in recipes {
                    self.insert(recipe);
                }
                self.selection.reset_to_first(&self.recipes);
                self.error = None;
                info!("Workspace holds {} recipes", self.recipes.len());
            }
            Err(e) => {
                warn!("Loading recipes failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn load<S: RecipeStore + ?Sized>(&mut self, store: &S) {
        self.begin_load();
        let result = store.list_all().await;
        self.finish_load(result);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Store `id` as the selection without checking it against the filter
    pub fn select(&mut self, id: RecipeId) {
        self.selection.select(id);
    }

    /// Select by a typed id, matching the rendered form of known ids
    pub fn select_input(&mut self, input: &str) {
        let input = input.trim();
        let id = self
            .recipes
            .iter()
            .map(|r| &r.id)
            .find(|id| id.to_string() == input)
            .cloned()
            .unwrap_or_else(|| RecipeId::Text(input.to_string()));
        self.select(id);
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the draft and mark a create as pending.
    ///
    /// Rejections happen here, before any request: a blank required field or a
    /// create that is already pending.
    pub fn begin_submit(&mut self) -> Result<NewRecipe, PantryError> {
        if self.saving {
            return Err(PantryError::SaveInProgress);
        }
        self.draft.validate()?;
        self.saving = true;
        Ok(self.draft.to_payload())
    }

    /// Commit the outcome of a create request; returns whether it succeeded.
    /// On failure the draft keeps what the user typed.
    pub fn finish_submit(&mut self, result: Result<Recipe, PantryError>) -> bool {
        self.saving = false;
        match result {
            Ok(created) => {
                let id = created.id.clone();
                self.insert(created);
                self.selection.select(id);
                self.error = None;
                self.draft.clear();
                true
            }
            Err(e) => {
                warn!("Adding recipe failed: {}", e);
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub async fn submit<S: RecipeStore + ?Sized>(&mut self, store: &S) -> Result<bool, PantryError> {
        let payload = self.begin_submit()?;
        let result = store.create(&payload).await;
        Ok(self.finish_submit(result))
    }

    // Ids stay unique: a record with a known id replaces the earlier one in place.
    fn insert(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => {
                warn!("Duplicate recipe id {}, keeping the latest record", recipe.id);
                *existing = recipe;
            }
            None => self.recipes.push(recipe),
        }
    }
}
