//! CI workflow annotations

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// `::error title=...::message` line understood by GitHub Actions
pub fn github_actions_annotation(level: AnnotationLevel, message: &str, title: Option<&str>) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = match title {
        Some(title) => format!(" title={}", escape_property(title)),
        None => String::new(),
    };

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_actions_annotation_escapes_newlines() {
        let rendered =
            github_actions_annotation(AnnotationLevel::Error, "Line1\nLine2", Some("Building image"));
        assert_eq!(rendered, "::error title=Building image::Line1%0ALine2");
    }

    #[test]
    fn title_is_optional() {
        let rendered = github_actions_annotation(AnnotationLevel::Warning, "unknown key", None);
        assert_eq!(rendered, "::warning::unknown key");
    }

    #[test]
    fn title_escapes_separators() {
        let rendered = github_actions_annotation(AnnotationLevel::Error, "x", Some("a:b,c"));
        assert!(rendered.starts_with("::error title=a%3Ab%2Cc::"));
    }
}
