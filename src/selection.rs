use crate::model::{Recipe, RecipeId};

/// The recipe the user last asked to see.
///
/// The stored id is never checked against the current filter; `resolve` falls back to the
/// first visible recipe when it is unset or filtered out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    id: Option<RecipeId>,
}

impl Selection {
    pub fn id(&self) -> Option<&RecipeId> {
        self.id.as_ref()
    }

    pub fn select(&mut self, id: RecipeId) {
        self.id = Some(id);
    }

    /// Select the first recipe, or nothing when the list is empty
    pub fn reset_to_first(&mut self, recipes: &[Recipe]) {
        self.id = recipes.first().map(|r| r.id.clone());
    }

    /// Recipe to display out of `visible`
    pub fn resolve<'a>(&self, visible: &[&'a Recipe]) -> Option<&'a Recipe> {
        self.id
            .as_ref()
            .and_then(|id| visible.iter().find(|r| &r.id == id))
            .or_else(|| visible.first())
            .copied()
    }
}
