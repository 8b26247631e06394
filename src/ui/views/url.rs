use runcast::domain::entities::{ServiceEndpoints, BACKEND_API};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_endpoints(
    service: &str,
    endpoints: &ServiceEndpoints,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Link, format!("{} endpoints", service));
    header.add("URL", endpoints.url.as_str());
    header.add("Docs", endpoints.docs.as_str());
    header.add("Health", endpoints.health.as_str());
    let mut out = header.render(supports_color, supports_unicode);

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        ColoredText::plain("API").bold().render(supports_color)
    ));
    for api in &BACKEND_API {
        out.push_str(&format!(
            "  {:<5} {}  {}\n",
            api.method,
            endpoints.resolve(api),
            ColoredText::dim(api.summary).render(supports_color)
        ));
    }
    out
}
