use crate::error::PantryError;
use crate::model::NewRecipe;
use std::fmt;
use std::str::FromStr;

/// A field of the new-recipe form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Cuisine,
    Time,
    Difficulty,
    Servings,
    Tags,
    Ingredients,
    Instructions,
}

impl DraftField {
    /// Form order
    pub const ALL: [DraftField; 8] = [
        DraftField::Title,
        DraftField::Cuisine,
        DraftField::Time,
        DraftField::Difficulty,
        DraftField::Servings,
        DraftField::Tags,
        DraftField::Ingredients,
        DraftField::Instructions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Cuisine => "cuisine",
            DraftField::Time => "time",
            DraftField::Difficulty => "difficulty",
            DraftField::Servings => "servings",
            DraftField::Tags => "tags",
            DraftField::Ingredients => "ingredients",
            DraftField::Instructions => "instructions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Cuisine => "Cuisine",
            DraftField::Time => "Time",
            DraftField::Difficulty => "Difficulty",
            DraftField::Servings => "Servings",
            DraftField::Tags => "Tags",
            DraftField::Ingredients => "Ingredients",
            DraftField::Instructions => "Instructions",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Title => "Smoky tofu tacos",
            DraftField::Cuisine => "Fusion",
            DraftField::Time => "25 min",
            DraftField::Difficulty => "Easy",
            DraftField::Servings => "4",
            DraftField::Tags => "vegan, weeknight",
            DraftField::Ingredients => "corn tortillas, chipotle, tofu, lime",
            DraftField::Instructions => "Marinate tofu, sear, warm tortillas, assemble.",
        }
    }

    /// Entered as one comma-separated string, sent as a sequence
    pub fn is_list(&self) -> bool {
        matches!(self, DraftField::Tags | DraftField::Ingredients)
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            DraftField::Title | DraftField::Ingredients | DraftField::Instructions
        )
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field '{}'", s.trim()))
    }
}

/// Unsubmitted form values, all held as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub cuisine: String,
    pub time: String,
    pub difficulty: String,
    pub servings: String,
    pub tags: String,
    pub ingredients: String,
    pub instructions: String,
}

impl Draft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Cuisine => &self.cuisine,
            DraftField::Time => &self.time,
            DraftField::Difficulty => &self.difficulty,
            DraftField::Servings => &self.servings,
            DraftField::Tags => &self.tags,
            DraftField::Ingredients => &self.ingredients,
            DraftField::Instructions => &self.instructions,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Cuisine => &mut self.cuisine,
            DraftField::Time => &mut self.time,
            DraftField::Difficulty => &mut self.difficulty,
            DraftField::Servings => &mut self.servings,
            DraftField::Tags => &mut self.tags,
            DraftField::Ingredients => &mut self.ingredients,
            DraftField::Instructions => &mut self.instructions,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    fn is_blank(&self, field: DraftField) -> bool {
        if field.is_list() {
            split_list(self.get(field)).is_empty()
        } else {
            self.get(field).trim().is_empty()
        }
    }

    /// First required field left blank, in form order
    pub fn validate(&self) -> Result<(), PantryError> {
        match DraftField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.is_blank(*field))
        {
            Some(field) => Err(PantryError::MissingField(field.label())),
            None => Ok(()),
        }
    }

    /// Create payload: scalars copied as-is, tags and ingredients split on commas
    pub fn to_payload(&self) -> NewRecipe {
        NewRecipe {
            title: self.title.clone(),
            cuisine: self.cuisine.clone(),
            time: self.time.clone(),
            difficulty: self.difficulty.clone(),
            servings: self.servings.clone(),
            tags: split_list(&self.tags),
            ingredients: split_list(&self.ingredients),
            instructions: self.instructions.clone(),
        }
    }
}

/// Split on commas, trim each piece and drop the empty ones
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
