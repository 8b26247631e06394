use runcast::application::{CheckItem, CheckStatus};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_item(item: &CheckItem, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match item.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Fail => Icon::Error,
        CheckStatus::Skipped => Icon::Skipped,
    }
    .colored(supports_color, supports_unicode);

    let message = match item.status {
        CheckStatus::Skipped => ColoredText::dim(item.message.as_str()).render(supports_color),
        _ => item.message.clone(),
    };

    let mut out = format!("  {} {} - {}\n", icon, item.name, message);

    if let Some(rec) = &item.recommendation {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_recommendation_line() {
        let item = CheckItem {
            name: "account",
            status: CheckStatus::Fail,
            message: "no active account".to_string(),
            recommendation: Some("Run `gcloud auth login`".to_string()),
        };

        let rendered = render_check_item(&item, false, false);
        assert!(rendered.contains("[FAIL] account - no active account"));
        assert!(rendered.contains("[>] Run `gcloud auth login`"));
    }

    #[test]
    fn skipped_item_has_skip_icon() {
        let item = CheckItem {
            name: "project",
            status: CheckStatus::Skipped,
            message: "requires an active account".to_string(),
            recommendation: None,
        };
        assert!(render_check_item(&item, false, false).starts_with("  [SKIP] project"));
    }
}
