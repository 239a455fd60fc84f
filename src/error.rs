//! Error types shared by the gateway, the caches and the detail views.

use crate::storage::StorageError;
use std::fmt;

/// Remote resources served by the statistics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Races,
    Qualifying,
    Results,
    Drivers,
    Constructors,
}

impl Resource {
    /// Endpoint path relative to the API domain.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Races => "races.php",
            Resource::Qualifying => "qualifying.php",
            Resource::Results => "results.php",
            Resource::Drivers => "drivers.php",
            Resource::Constructors => "constructors.php",
        }
    }

    /// Word used in "Error fetching ... data" messages.
    pub fn label(self) -> &'static str {
        match self {
            Resource::Races => "race",
            Resource::Qualifying => "qualifying",
            Resource::Results => "results",
            Resource::Drivers => "driver",
            Resource::Constructors => "constructor",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The endpoint answered with a non-2xx status.
    Http { resource: Resource, status: u16 },
    /// The request never produced a response.
    Transport { resource: Resource, message: String },
    /// The response body was not the JSON shape we expect.
    Decode { resource: Resource, message: String },
    Storage(StorageError),
    /// A stored entry exists but cannot be read back.
    CorruptEntry { key: String, message: String },
    NotFound(String),
    NoResults(String),
    InvalidSeason(String),
    InvalidFavoriteKind(String),
    /// A required mount point or browser facility is missing.
    Init(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http { resource, status } => write!(
                f,
                "Error fetching {} data (HTTP {})",
                resource.label(),
                status
            ),
            AppError::Transport { resource, message } => {
                write!(f, "Error fetching {} data: {}", resource.label(), message)
            }
            AppError::Decode { resource, message } => {
                write!(f, "Malformed {} data: {}", resource.label(), message)
            }
            AppError::Storage(e) => write!(f, "{}", e),
            AppError::CorruptEntry { key, message } => {
                write!(f, "Stored entry '{}' is unreadable: {}", key, message)
            }
            AppError::NotFound(what) => write!(f, "{} not found", what),
            AppError::NoResults(msg) => write!(f, "{}", msg),
            AppError::InvalidSeason(value) => write!(f, "Unsupported season: {}", value),
            AppError::InvalidFavoriteKind(kind) => write!(f, "Invalid favorite kind: {}", kind),
            AppError::Init(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_names_the_failing_resource() {
        let err = AppError::Http {
            resource: Resource::Qualifying,
            status: 500,
        };
        assert_eq!(err.to_string(), "Error fetching qualifying data (HTTP 500)");

        let err = AppError::Http {
            resource: Resource::Races,
            status: 404,
        };
        assert!(err.to_string().starts_with("Error fetching race data"));
    }
}
