use runcast::application::DeployResult;
use runcast::domain::entities::DeployConfig;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_deploy_header(
    config: &DeployConfig,
    config_source: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "Runcast Deploy");
    header.add("Project", config.project().as_str());
    header.add("Region", config.region());
    header.add("Service", config.service_name());
    header.add("Image", config.image().as_str());
    header.add("Source", config.source_dir().display().to_string());
    if let Some(source) = config_source {
        header.add("Config", source);
    }

    header.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    result: &DeployResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Deploy Complete");
    summary.add_row("Service", result.service.as_str());
    summary.add_row("Image", result.image.as_str());
    summary.add_row("URL", result.endpoints.url.as_str());
    summary.add_row("Docs", result.endpoints.docs.as_str());
    summary.add_row("Health", result.endpoints.health.as_str());

    if let Some(mapping) = &result.domain {
        summary.add_row("Domain", mapping.domain.as_str());
        if mapping.records.is_empty() {
            summary.add_warning(
                "DNS records not available yet; run `gcloud beta run domain-mappings describe` later",
            );
        } else {
            summary.add_note(format!(
                "{} Add these DNS records at your registrar:",
                Icon::Domain.colored(supports_color, supports_unicode)
            ));
            for record in &mapping.records {
                summary.add_note(format!(
                    "  {} {} {}",
                    mapping.record_label(record),
                    record.record_type,
                    record.rrdata
                ));
            }
        }
    }

    summary.with_next_step(format!("Open {}", result.endpoints.docs));
    summary.render(supports_color, supports_unicode)
}
