//! Project Identifier Value Object
//!
//! A validated Google Cloud project id:
//! - 6 to 30 characters
//! - Lowercase ASCII letters, digits and hyphens
//! - Starts with a letter, does not end with a hyphen
//!
//! Legacy domain-scoped ids (`example.com:my-proj`) are accepted; the
//! rules above then apply to the part after the colon.

use std::fmt;

use super::DomainName;

const MIN_LEN: usize = 6;
const MAX_LEN: usize = 30;

/// Error when project id validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectIdError {
    /// Length outside 6..=30
    Length(usize),
    /// First character is not a lowercase letter
    InvalidStart,
    /// Trailing hyphen
    TrailingHyphen,
    /// Character outside `[a-z0-9-]`
    InvalidChar(char),
    /// Scope before `:` is not a lowercase domain name
    InvalidScope(String),
}

impl fmt::Display for ProjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectIdError::Length(len) => write!(
                f,
                "must be {}-{} characters long (got {})",
                MIN_LEN, MAX_LEN, len
            ),
            ProjectIdError::InvalidStart => write!(f, "must start with a lowercase letter"),
            ProjectIdError::TrailingHyphen => write!(f, "must not end with a hyphen"),
            ProjectIdError::InvalidChar(c) => write!(
                f,
                "contains '{}'; only lowercase letters, digits and hyphens are allowed",
                c
            ),
            ProjectIdError::InvalidScope(scope) => {
                write!(f, "scope '{}' is not a valid domain name", scope)
            }
        }
    }
}

impl std::error::Error for ProjectIdError {}

/// A validated Google Cloud project identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn parse(value: &str) -> Result<Self, ProjectIdError> {
        let name = match value.split_once(':') {
            Some((scope, name)) => {
                let canonical = DomainName::parse(scope)
                    .map(|d| d.as_str() == scope)
                    .unwrap_or(false);
                if !canonical {
                    return Err(ProjectIdError::InvalidScope(scope.to_string()));
                }
                name
            }
            None => value,
        };

        Self::check_name(name)?;
        Ok(Self(value.to_string()))
    }

    fn check_name(value: &str) -> Result<(), ProjectIdError> {
        let len = value.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(ProjectIdError::Length(len));
        }

        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(ProjectIdError::InvalidChar(c));
        }

        if !value.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(ProjectIdError::InvalidStart);
        }

        if value.ends_with('-') {
            return Err(ProjectIdError::TrailingHyphen);
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain scope of a legacy id, if any
    pub fn scope(&self) -> Option<&str> {
        self.0.split_once(':').map(|(scope, _)| scope)
    }

    /// The id without its domain scope
    pub fn name(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, name)| name)
    }

    /// Path segment for container registries, which write the scope as a
    /// directory: `example.com/my-proj`.
    pub fn registry_path(&self) -> String {
        self.0.replacen(':', "/", 1)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_project() {
        let id = ProjectId::parse("sw-musicfasapi").unwrap();
        assert_eq!(id.as_str(), "sw-musicfasapi");
    }

    #[test]
    fn accepts_demo_project() {
        assert!(ProjectId::parse("demo-proj").is_ok());
    }

    #[test]
    fn rejects_short_ids() {
        assert_eq!(ProjectId::parse("demo"), Err(ProjectIdError::Length(4)));
    }

    #[test]
    fn rejects_uppercase() {
        assert_eq!(
            ProjectId::parse("Demo-proj"),
            Err(ProjectIdError::InvalidChar('D'))
        );
    }

    #[test]
    fn rejects_leading_digit() {
        assert_eq!(
            ProjectId::parse("1demo-proj"),
            Err(ProjectIdError::InvalidStart)
        );
    }

    #[test]
    fn rejects_trailing_hyphen() {
        assert_eq!(
            ProjectId::parse("demo-proj-"),
            Err(ProjectIdError::TrailingHyphen)
        );
    }

    #[test]
    fn accepts_domain_scoped_id() {
        let id = ProjectId::parse("example.com:my-proj").unwrap();
        assert_eq!(id.as_str(), "example.com:my-proj");
        assert_eq!(id.scope(), Some("example.com"));
        assert_eq!(id.name(), "my-proj");
        assert_eq!(id.registry_path(), "example.com/my-proj");
    }

    #[test]
    fn plain_id_has_no_scope() {
        let id = ProjectId::parse("demo-proj").unwrap();
        assert_eq!(id.scope(), None);
        assert_eq!(id.name(), "demo-proj");
        assert_eq!(id.registry_path(), "demo-proj");
    }

    #[test]
    fn scoped_id_checks_both_parts() {
        assert_eq!(
            ProjectId::parse("Example.com:my-proj"),
            Err(ProjectIdError::InvalidScope("Example.com".to_string()))
        );
        assert_eq!(
            ProjectId::parse("localhost:my-proj"),
            Err(ProjectIdError::InvalidScope("localhost".to_string()))
        );
        assert_eq!(
            ProjectId::parse("example.com:proj"),
            Err(ProjectIdError::Length(4))
        );
        assert_eq!(
            ProjectId::parse("example.com:my:proj"),
            Err(ProjectIdError::InvalidChar(':'))
        );
    }

    #[test]
    fn error_message_mentions_bounds() {
        let err = ProjectId::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "must be 6-30 characters long (got 3)");
    }
}
