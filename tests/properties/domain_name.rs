//! Property tests for custom domain validation.

use proptest::prelude::*;

use runcast::DomainName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary operator input never panics.
    #[test]
    fn property_domain_parse_never_panics(input in "\\PC{0,80}") {
        let _ = DomainName::parse(&input);
    }

    /// PROPERTY: Accepted domains are normalized and parse to themselves.
    #[test]
    fn property_domain_parse_is_idempotent(
        labels in proptest::collection::vec("[A-Za-z0-9]([A-Za-z0-9-]{0,10}[A-Za-z0-9])?", 2..=4),
        trailing_dot in any::<bool>(),
    ) {
        let mut input = labels.join(".");
        if trailing_dot {
            input.push('.');
        }

        if let Ok(domain) = DomainName::parse(&input) {
            prop_assert_eq!(domain.as_str(), domain.as_str().to_ascii_lowercase());
            prop_assert!(!domain.as_str().ends_with('.'));
            let again = DomainName::parse(domain.as_str()).unwrap();
            prop_assert_eq!(again, domain);
        }
    }
}
