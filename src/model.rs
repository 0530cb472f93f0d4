use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Server-assigned recipe identifier.
///
/// json-server hands out numbers or strings depending on version, so both are accepted
/// and kept as they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecipeId {
    fn from(n: i64) -> Self {
        RecipeId::Number(n)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        RecipeId::Text(s.to_string())
    }
}

/// A recipe record as served by the collection resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Recipe {
    /// Minimal recipe with only an id and a title
    pub fn new(id: impl Into<RecipeId>, title: impl Into<String>) -> Self {
        Recipe {
            id: id.into(),
            title: title.into(),
            cuisine: None,
            time: None,
            difficulty: None,
            servings: None,
            tags: Vec::new(),
            ingredients: Vec::new(),
            instructions: None,
        }
    }
}

/// Body of a create request: a recipe without its id.
///
/// Scalars are sent exactly as typed (blank ones included); `tags` and
/// `ingredients` are already split into sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub cuisine: String,
    pub time: String,
    pub difficulty: String,
    pub servings: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}

fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
