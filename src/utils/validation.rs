use crate::utils::error::{Result, StoreError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Storage keys become file names, so they must stay within one path segment.
pub fn validate_storage_key(key: &str) -> Result<()> {
    validate_non_empty_string("storage.key", key)?;

    if key.contains(&['/', '\\', '\0'][..]) || key == "." || key == ".." {
        return Err(StoreError::InvalidConfigValueError {
            field: "storage.key".to_string(),
            value: key.to_string(),
            reason: "Key must be a single path segment".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.dir", "./prefs").is_ok());
        assert!(validate_path("storage.dir", "").is_err());
        assert!(validate_path("storage.dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("carousel.interval_ms", 3000u64, 100, 60_000).is_ok());
        assert!(validate_range("carousel.interval_ms", 0u64, 100, 60_000).is_err());
    }

    #[test]
    fn test_validate_storage_key() {
        assert!(validate_storage_key("favorites").is_ok());
        assert!(validate_storage_key("language").is_ok());
        assert!(validate_storage_key("../etc").is_err());
        assert!(validate_storage_key("..").is_err());
        assert!(validate_storage_key("  ").is_err());
    }
}
