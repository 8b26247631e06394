//! Image Tag Value Object
//!
//! The container image name a build is tagged with. Always derived as
//! `{registry}/{project}/{image}` so the same project always builds the
//! same tag.

use std::fmt;

use super::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageTag(String);

impl ImageTag {
    /// Derive the tag for `project` under `registry`.
    ///
    /// Surrounding slashes on `registry` and `image` are ignored so
    /// `gcr.io/` and `gcr.io` produce the same tag. A domain-scoped
    /// project becomes two path segments.
    pub fn derive(registry: &str, project: &ProjectId, image: &str) -> Self {
        let registry = registry.trim_matches('/');
        let image = image.trim_matches('/');
        Self(format!("{}/{}/{}", registry, project.registry_path(), image))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ProjectId {
        ProjectId::parse("demo-proj").unwrap()
    }

    #[test]
    fn combines_registry_project_and_image() {
        let tag = ImageTag::derive("registry", &demo(), "backend-image");
        assert_eq!(tag.as_str(), "registry/demo-proj/backend-image");
    }

    #[test]
    fn default_registry_layout() {
        let tag = ImageTag::derive("gcr.io", &demo(), "sw-music-backend");
        assert_eq!(tag.to_string(), "gcr.io/demo-proj/sw-music-backend");
    }

    #[test]
    fn domain_scoped_project_uses_a_path() {
        let project = ProjectId::parse("example.com:my-proj").unwrap();
        let tag = ImageTag::derive("gcr.io", &project, "api");
        assert_eq!(tag.as_str(), "gcr.io/example.com/my-proj/api");
    }

    #[test]
    fn ignores_stray_slashes() {
        let tag = ImageTag::derive("gcr.io/", &demo(), "/sw-music-backend");
        assert_eq!(tag.as_str(), "gcr.io/demo-proj/sw-music-backend");
    }
}
