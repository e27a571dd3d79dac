use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error for key '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported language tag: '{tag}'")]
    InvalidLanguageTag { tag: String },

    #[error("Unknown category: '{slug}'")]
    UnknownCategory { slug: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::IoError(_)
            | StoreError::SerializationError(_)
            | StoreError::StorageError { .. } => ErrorCategory::Storage,
            StoreError::ConfigValidationError { .. }
            | StoreError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StoreError::InvalidLanguageTag { .. } | StoreError::UnknownCategory { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Favorites and language are convenience state; losing a write is not fatal.
            StoreError::StorageError { .. } | StoreError::SerializationError(_) => {
                ErrorSeverity::Low
            }
            StoreError::InvalidLanguageTag { .. } | StoreError::UnknownCategory { .. } => {
                ErrorSeverity::Medium
            }
            StoreError::ConfigValidationError { .. }
            | StoreError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            StoreError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StoreError::IoError(_) => {
                "Check that the storage directory exists and is writable".to_string()
            }
            StoreError::SerializationError(_) => {
                "Clear the stored value; it will be recreated on the next change".to_string()
            }
            StoreError::StorageError { key, .. } => {
                format!("Remove the stored '{}' entry and try again", key)
            }
            StoreError::ConfigValidationError { field, .. }
            | StoreError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration file", field)
            }
            StoreError::InvalidLanguageTag { .. } => "Use one of: en, he".to_string(),
            StoreError::UnknownCategory { .. } => "Use one of: beds, couches".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::IoError(e) => format!("Could not access local storage: {}", e),
            StoreError::SerializationError(_) => "Stored data is corrupted".to_string(),
            StoreError::StorageError { key, .. } => {
                format!("Could not save your '{}' preference", key)
            }
            StoreError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            StoreError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in {}: {}", field, reason)
            }
            StoreError::InvalidLanguageTag { tag } => {
                format!("'{}' is not a supported language", tag)
            }
            StoreError::UnknownCategory { slug } => format!("Category '{}' not found", slug),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
