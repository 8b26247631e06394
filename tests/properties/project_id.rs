//! Property tests for project id validation and image tag derivation.

use proptest::prelude::*;

use runcast::{ImageTag, ProjectId};

fn valid_project_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{4,28}[a-z0-9]").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics, and accepted ids are canonical.
    #[test]
    fn property_project_id_parse_never_panics(input in "\\PC{0,40}") {
        if let Ok(id) = ProjectId::parse(&input) {
            prop_assert_eq!(id.as_str(), input.as_str());
            prop_assert!(id.name().len() >= 6 && id.name().len() <= 30);
            prop_assert!(!id.name().ends_with('-'));
        }
    }

    /// PROPERTY: Well-formed ids are always accepted.
    #[test]
    fn property_well_formed_ids_parse(input in valid_project_id()) {
        prop_assert!(ProjectId::parse(&input).is_ok(), "rejected {}", input);
    }

    /// PROPERTY: A domain scope never changes whether the name part is accepted.
    #[test]
    fn property_scope_keeps_name_rules(input in "[a-z0-9-]{0,32}") {
        let plain = ProjectId::parse(&input);
        let scoped = ProjectId::parse(&format!("example.com:{}", input));
        prop_assert_eq!(plain.is_ok(), scoped.is_ok());
    }

    /// PROPERTY: The image tag is always registry/project/image.
    #[test]
    fn property_image_tag_embeds_project(
        input in valid_project_id(),
        image in "[a-z][a-z0-9-]{0,20}",
    ) {
        let project = ProjectId::parse(&input).unwrap();
        let tag = ImageTag::derive("gcr.io", &project, &image);
        prop_assert_eq!(tag.as_str(), format!("gcr.io/{}/{}", input, image));
    }
}
