use runcast::application::{CheckResult, CheckStatus};

use crate::ui::blocks::check_item::render_check_item;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    project: &str,
    gcloud: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Runcast Check");
    header.add("Project", project);
    header.add("gcloud", gcloud);
    header.render(supports_color, supports_unicode)
}

pub fn render_check_result(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for item in &result.items {
        out.push_str(&render_check_item(item, supports_color, supports_unicode));
    }
    out.push('\n');

    let mut summary = if result.is_success() {
        ResultSummary::success("Ready to deploy")
    } else {
        ResultSummary::failure("Not ready to deploy")
    };
    summary.add_row("Passed", result.count(CheckStatus::Pass).to_string());
    summary.add_row("Failed", result.count(CheckStatus::Fail).to_string());
    summary.add_row("Skipped", result.count(CheckStatus::Skipped).to_string());
    if result.is_success() {
        summary.with_next_step("Run `runcast deploy`");
    } else {
        summary.with_next_step("Fix the failed checks and run `runcast check` again");
    }

    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
