use thiserror::Error;

/// Errors that can occur while browsing or adding recipes
#[derive(Error, Debug)]
pub enum PantryError {
    /// Listing the collection failed (transport, status or body)
    #[error("{0}")]
    FetchFailure(String),

    /// Creating a recipe failed (transport, status or body)
    #[error("{0}")]
    CreateFailure(String),

    /// A required draft field is blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A create request is already pending
    #[error("A recipe is already being saved")]
    SaveInProgress,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl PantryError {
    pub(crate) fn fetch_status(status: reqwest::StatusCode) -> Self {
        PantryError::FetchFailure(format!("API unavailable (HTTP {})", status.as_u16()))
    }

    pub(crate) fn fetch_transport(err: reqwest::Error) -> Self {
        PantryError::FetchFailure(format!("Unable to fetch recipes: {}", err))
    }

    pub(crate) fn create_status(status: reqwest::StatusCode) -> Self {
        PantryError::CreateFailure(format!("Unable to add recipe (HTTP {})", status.as_u16()))
    }

    pub(crate) fn create_transport(err: reqwest::Error) -> Self {
        PantryError::CreateFailure(format!("Unable to add recipe: {}", err))
    }
}
