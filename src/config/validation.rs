//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before a loaded config is accepted

use std::path::PathBuf;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// max_connections must be at least 1.
    ZeroMaxConnections,
    /// The document root is empty.
    EmptyDocumentRoot,
    /// The document root exists but is not a directory.
    DocumentRootNotADirectory(PathBuf),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroMaxConnections => {
                write!(f, "max_connections must be at least 1")
            }
            ValidationError::EmptyDocumentRoot => write!(f, "document_root is empty"),
            ValidationError::DocumentRootNotADirectory(p) => {
                write!(f, "document_root {} is not a directory", p.display())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every problem found.
///
/// A document root that does not exist yet is accepted: embedders often
/// generate it just before starting. One that exists as a file is not.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }

    if config.document_root.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDocumentRoot);
    } else if config.document_root.exists() && !config.document_root.is_dir() {
        errors.push(ValidationError::DocumentRootNotADirectory(
            config.document_root.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let config = ServerConfig {
            port: 8080,
            document_root: PathBuf::new(),
            max_connections: 0,
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroMaxConnections));
        assert!(errors.contains(&ValidationError::EmptyDocumentRoot));
    }

    #[test]
    fn file_as_document_root_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ServerConfig {
            document_root: file.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::DocumentRootNotADirectory(_)
        ));
    }
}
