use thiserror::Error;

/// Convenient result alias for the transport catalogue library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a stop name could not be found in the catalogue.
    #[error("unknown stop name: {name}{}", format_suggestions(.suggestions))]
    UnknownStop {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a bus name could not be found in the catalogue.
    #[error("unknown bus name: {name}")]
    UnknownBus { name: String },

    /// Raised when a stop with the same name was already added.
    #[error("duplicate stop name encountered: {name}")]
    DuplicateStop { name: String },

    /// Raised when a bus with the same name was already added.
    #[error("duplicate bus name encountered: {name}")]
    DuplicateBus { name: String },

    /// Raised when a bus is declared without any stops.
    #[error("bus {name} does not list any stops")]
    EmptyBusRoute { name: String },

    /// Raised when no route could be found between two stops.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a route query reaches a router whose graph was never built.
    #[error("routing graph has not been built yet")]
    RouterNotBuilt,

    /// Raised when the input document or the routing settings are unusable.
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding and encoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// `true` for lookup failures that a query facade reports as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::UnknownStop { .. } | Error::UnknownBus { .. } | Error::RouteNotFound { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
