use std::fmt::Write as _;
use crate::config::Properties;
use crate::core::Scenario;
use crate::utils::{format_count, format_dollars, format_quantity};
use super::chart::ChartData;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Renders the full report page: cost charts, the headline table and the
/// input parameters.
pub fn render_page(properties: &Properties, scenarios: &[Scenario]) -> String {
    let chart = ChartData::from_scenarios(scenarios);
    let chart_json = serde_json::to_string(&chart)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    let mut page = String::with_capacity(16 * 1024);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{}</title>", escape(&chart.title));
    let _ = writeln!(page, "<script src=\"{}\"></script>", PLOTLY_CDN);
    page.push_str(STYLE);
    page.push_str("</head>\n<body>\n");
    let _ = writeln!(page, "<h1>{}</h1>", escape(&chart.title));
    page.push_str("<div id=\"cost-chart\" class=\"chart\"></div>\n");
    page.push_str(&headline_table(scenarios));
    page.push_str("<div id=\"profile-chart\" class=\"chart\"></div>\n");
    page.push_str(&parameter_table(properties));
    let _ = writeln!(page, "<script>const chartData = {};</script>", chart_json);
    page.push_str(PLOT_SCRIPT);
    page.push_str("</body>\n</html>\n");
    page
}

fn headline_table(scenarios: &[Scenario]) -> String {
    let mut table = String::from(
        "<table>\n<tr><th>Messages Per Day</th><th>Batch Size</th><th>Requests per Day using Batch</th>\
         <th>Requests per Month</th><th>Memory (MB) per Invocation</th><th>Duration (ms) per Batch</th>\
         <th>Total GB-seconds per Month</th><th>$ Cost for x86 (after free tier)</th>\
         <th>$ Cost for ARM (after free tier)</th></tr>\n",
    );
    for scenario in scenarios {
        let headline = &scenario.headline;
        let _ = writeln!(
            table,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            format_count(headline.messages_per_day as f64),
            scenario.batch_size,
            format_count(headline.requests_per_day),
            format_count(headline.requests_per_month),
            scenario.memory_mb,
            if scenario.memory_clamped { " (capped)" } else { "" },
            format_quantity(scenario.duration_ms),
            format_quantity(headline.gb_seconds_per_month),
            format_dollars(headline.cost_x86),
            format_dollars(headline.cost_arm),
        );
    }
    table.push_str("</table>\n");
    table
}

fn parameter_table(properties: &Properties) -> String {
    let mut table = String::from("<table>\n<tr><th>Input Parameter</th><th>Value</th></tr>\n");
    for (key, value) in properties.iter() {
        let _ = writeln!(table, "<tr><td>{}</td><td>{}</td></tr>", escape(key), value);
    }
    table.push_str("</table>\n");
    table
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = "<style>\n\
body { font-family: sans-serif; margin: 2em; }\n\
.chart { height: 600px; }\n\
table { border-collapse: collapse; margin: 2em 0; }\n\
th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: right; }\n\
</style>\n";

const PLOT_SCRIPT: &str = r#"<script>
const toTrace = (s) => ({ x: s.x, y: s.y, name: s.name, mode: "lines+markers", yaxis: s.axis === "secondary" ? "y2" : "y" });
Plotly.newPlot("cost-chart", chartData.costSeries.map(toTrace), {
  xaxis: { title: { text: "Million Messages per Day" } },
  yaxis: { title: { text: "Cost Per Month ($)" } }
});
Plotly.newPlot("profile-chart", chartData.batchProfile.map(toTrace), {
  xaxis: { title: { text: "Batch Size" } },
  yaxis: { title: { text: "Memory (MB)" } },
  yaxis2: { title: { text: "Duration (ms)" }, overlaying: "y", side: "right" }
});
</script>
"#;
