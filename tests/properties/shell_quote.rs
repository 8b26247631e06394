//! Property tests for the command echo used by --verbose and --dry-run.

use proptest::prelude::*;

use runcast::infrastructure::gcloud::shell_quote;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Plain arguments are echoed verbatim.
    #[test]
    fn property_plain_args_unquoted(arg in "[A-Za-z0-9_./:=,@+-]{1,30}") {
        prop_assert_eq!(shell_quote(&arg), arg);
    }

    /// PROPERTY: Quoted output is a single-quoted word that unquotes to the input.
    #[test]
    fn property_quoted_args_round_trip(arg in "\\PC{0,30}") {
        let quoted = shell_quote(&arg);
        if quoted != arg {
            prop_assert!(quoted.starts_with('\'') && quoted.ends_with('\''));
            let inner = &quoted[1..quoted.len() - 1];
            prop_assert_eq!(inner.replace("'\\''", "'"), arg);
        }
    }
}
