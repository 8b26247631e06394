//! Domain Name Value Object
//!
//! A custom DNS name the operator wants mapped onto the deployed service.
//! Input is trimmed and lower-cased before validation.

use std::fmt;

const MAX_LABEL_LEN: usize = 63;
const MAX_LEN: usize = 253;

/// Error when domain validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainNameError {
    Empty,
    TooLong(usize),
    /// A bare name like `localhost`
    MissingDot,
    /// A label that is empty, too long, or starts/ends with `-`
    InvalidLabel(String),
    InvalidChar(char),
}

impl fmt::Display for DomainNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainNameError::Empty => write!(f, "domain is empty"),
            DomainNameError::TooLong(len) => {
                write!(f, "domain is {} characters long (max {})", len, MAX_LEN)
            }
            DomainNameError::MissingDot => {
                write!(f, "domain needs at least two labels (e.g. api.example.com)")
            }
            DomainNameError::InvalidLabel(label) => write!(f, "invalid label '{}'", label),
            DomainNameError::InvalidChar(c) => write!(f, "invalid character '{}'", c),
        }
    }
}

impl std::error::Error for DomainNameError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainNameError> {
        let value = input.trim().trim_end_matches('.').to_ascii_lowercase();

        if value.is_empty() {
            return Err(DomainNameError::Empty);
        }
        if value.len() > MAX_LEN {
            return Err(DomainNameError::TooLong(value.len()));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
        {
            return Err(DomainNameError::InvalidChar(c));
        }
        if !value.contains('.') {
            return Err(DomainNameError::MissingDot);
        }

        for label in value.split('.') {
            if label.is_empty()
                || label.len() > MAX_LABEL_LEN
                || label.starts_with('-')
                || label.ends_with('-')
            {
                return Err(DomainNameError::InvalidLabel(label.to_string()));
            }
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let domain = DomainName::parse("  API.Example.com.\n").unwrap();
        assert_eq!(domain.as_str(), "api.example.com");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(DomainName::parse("   "), Err(DomainNameError::Empty));
    }

    #[test]
    fn rejects_single_label() {
        assert_eq!(
            DomainName::parse("localhost"),
            Err(DomainNameError::MissingDot)
        );
    }

    #[test]
    fn rejects_hyphen_edges() {
        assert_eq!(
            DomainName::parse("-api.example.com"),
            Err(DomainNameError::InvalidLabel("-api".to_string()))
        );
    }

    #[test]
    fn rejects_empty_label() {
        assert_eq!(
            DomainName::parse("api..example.com"),
            Err(DomainNameError::InvalidLabel(String::new()))
        );
    }

    #[test]
    fn rejects_scheme() {
        assert_eq!(
            DomainName::parse("https://example.com"),
            Err(DomainNameError::InvalidChar(':'))
        );
    }
}
