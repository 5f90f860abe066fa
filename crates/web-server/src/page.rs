//! Server-side HTML for the dashboard page.

use configuration::DashboardSettings;
use core_types::{Mode, Property, PropertyNames};
use selection::{RoutedView, Selection};

/// Renders the whole page: header, selection form, chart and analysis.
pub fn render(dashboard: &DashboardSettings, names: &PropertyNames, view: &RoutedView, svg: &str) -> String {
    let mut html = String::with_capacity(svg.len() + 4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&dashboard.title)));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main>\n");

    if !dashboard.logo_url.is_empty() {
        html.push_str(&format!(
            "<div class=\"logo\"><img src=\"{}\" alt=\"{} Logo\"></div>\n",
            escape(&dashboard.logo_url),
            escape(&names.subject)
        ));
    }
    html.push_str(&format!("<h1>{}</h1>\n", escape(&dashboard.title)));
    html.push_str(&format!("<p>{}</p>\n", escape(&dashboard.subtitle)));

    html.push_str(&form(names, &view.selection));

    html.push_str(&format!("<h2>{}</h2>\n", escape(&view.chart.subheader)));
    html.push_str(&format!("<figure class=\"chart\">{svg}</figure>\n"));
    html.push_str(&analysis_html(&view.analysis));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn form(names: &PropertyNames, selection: &Selection) -> String {
    let mode = selection.mode();
    let mut html = String::from("<form method=\"get\" action=\"/\">\n<input type=\"hidden\" name=\"submitted\" value=\"1\">\n");

    html.push_str("<fieldset><legend>Select Comparison Mode</legend>\n");
    for option in [Mode::Solo, Mode::Comparison] {
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"mode\" value=\"{}\"{}> {}</label>\n",
            option.id(),
            checked(option == mode),
            option.label()
        ));
    }
    html.push_str("</fieldset>\n");

    if let Selection::Comparison { competitors, .. } = selection {
        html.push_str("<fieldset><legend>Select Competitor(s) to Compare Against</legend>\n");
        for property in [Property::Competitor, Property::Market] {
            html.push_str(&format!(
                "<label><input type=\"checkbox\" name=\"{}\" value=\"on\"{}> {}</label>\n",
                property.id(),
                checked(competitors.contains(property)),
                escape(&property.series_label(names))
            ));
        }
        html.push_str("</fieldset>\n");
    }

    html.push_str("<label>Select a Metric to Visualize <select name=\"metric\">\n");
    for metric in mode.metrics() {
        let selected = if metric == selection.metric() { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            metric.id(),
            escape(&metric.label(names))
        ));
    }
    html.push_str("</select></label>\n<button type=\"submit\">Show</button>\n</form>\n");
    html
}

fn checked(on: bool) -> &'static str {
    if on { " checked" } else { "" }
}

/// Converts the analysis text to HTML. Lines starting with "- " become list items
/// and `**bold**` spans become `<strong>`.
fn analysis_html(text: &str) -> String {
    let mut html = String::from("<section class=\"analysis\">\n");
    let mut in_list = false;
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match line.strip_prefix("- ") {
            Some(item) => {
                if !in_list {
                    html.push_str("<ul>\n");
                    in_list = true;
                }
                html.push_str(&format!("<li>{}</li>\n", emphasis(&escape(item))));
            }
            None => {
                if in_list {
                    html.push_str("</ul>\n");
                    in_list = false;
                }
                html.push_str(&format!("<p>{}</p>\n", emphasis(&escape(line))));
            }
        }
    }
    if in_list {
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}

fn emphasis(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for (i, part) in line.split("**").enumerate() {
        if i % 2 == 1 {
            out.push_str(&format!("<strong>{part}</strong>"));
        } else {
            out.push_str(part);
        }
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "<style>
body { font-family: sans-serif; margin: 0; background: #fafafa; color: #222; }
main { max-width: 1000px; margin: 0 auto; padding: 1.5rem; }
.logo { text-align: center; }
.logo img { max-width: 320px; }
fieldset { border: none; padding: 0; margin: 0 0 0.75rem 0; }
legend { font-weight: bold; margin-bottom: 0.25rem; }
label { margin-right: 1rem; }
.chart svg { max-width: 100%; height: auto; }
</style>
";
