use runcast::infrastructure::gcloud::PlannedCommand;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_plan(
    project: &str,
    plan: &[PlannedCommand],
    domain_prompted: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Plan, "Runcast Deploy (dry run)");
    header.add("Project", project);
    header.add("Commands", plan.len().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    let mut last_step = None;
    for planned in plan {
        if last_step != Some(planned.step) {
            out.push_str(&format!(
                "{}\n",
                ColoredText::dim(format!("# {}. {}", planned.step.number(), planned.step.title()))
                    .render(supports_color)
            ));
            last_step = Some(planned.step);
        }
        out.push_str(&format!("{}\n", planned.command));
    }

    if domain_prompted {
        out.push_str(&format!(
            "{}\n",
            ColoredText::dim("# 7. Custom domain: asked interactively (pass --domain to plan it)")
                .render(supports_color)
        ));
    }
    out
}
