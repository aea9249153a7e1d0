// Server-rendered HTML pages with Chart.js line charts.
// Totals go on the left axis, per-step changes (dashed) on the right axis.

use std::fmt::Write as _;
use std::time::Duration;

use crate::models::{Counter, Sample};
use crate::view::{self, Series};

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #f0f2f5; margin: 0; display: flex; justify-content: center; align-items: center; min-height: 100vh; }
.container { background-color: #ffffff; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); padding: 30px; max-width: 800px; width: 100%; }
h1 { color: #1a237e; text-align: center; margin-bottom: 30px; }
.stats-container { display: flex; justify-content: space-between; margin-bottom: 30px; }
.stat-box { background-color: #e8eaf6; border-radius: 8px; padding: 20px; width: 45%; color: inherit; }
.stat-box:hover { background-color: #c5cae9; text-decoration: none; }
.stat-title { font-size: 18px; font-weight: bold; color: #3f51b5; margin-bottom: 10px; }
.stat-value { font-size: 24px; font-weight: bold; color: #1a237e; }
.increase { color: #4caf50; font-weight: bold; }
.last-updated { text-align: center; color: #757575; font-style: italic; }
.footer { text-align: center; color: #757575; font-size: 12px; margin-top: 20px; }
.chart-container { margin-top: 30px; }
a { color: #3f51b5; text-decoration: none; }
a:hover { text-decoration: underline; }
"#;

// Left axis shows only the last five digits of the (large) totals.
const CHART_OPTIONS: &str = r#"{
    responsive: true,
    scales: {
        total: { type: 'linear', position: 'left', ticks: { callback: (v) => v.toString().slice(-5) } },
        change: { type: 'linear', position: 'right', suggestedMin: -1, suggestedMax: 5 }
    }
}"#;

/// Data shown on `/`.
pub struct Overview {
    pub latest: Sample,
    pub watchdog_increase: Option<i64>,
    pub staff_increase: Option<i64>,
    /// Lookback the increases were computed over.
    pub increase_window: Duration,
    pub watchdog: Series,
    pub staff: Series,
}

/// "N/A" when there is not yet a sample older than the increase window.
pub fn increase_text(increase: Option<i64>) -> String {
    increase.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Human wording of a lookback window: "5 minutes", "1 minute", "90 seconds".
pub fn window_text(window: Duration) -> String {
    let secs = window.as_secs();
    match (secs % 60, secs / 60) {
        (0, 1) => "1 minute".to_string(),
        (0, minutes) if minutes > 0 => format!("{minutes} minutes"),
        _ if secs == 1 => "1 second".to_string(),
        _ => format!("{secs} seconds"),
    }
}

pub fn overview_page(overview: &Overview) -> Result<String, serde_json::Error> {
    let window = window_text(overview.increase_window);
    let mut boxes = String::new();
    for (counter, increase) in [
        (Counter::Watchdog, overview.watchdog_increase),
        (Counter::Staff, overview.staff_increase),
    ] {
        let _ = write!(
            boxes,
            r#"<a class="stat-box" href="/{slug}">
    <div class="stat-title">{title} Total</div>
    <div class="stat-value" id="{slug}-total">{total}</div>
    <div>Last {window} banned: <span class="increase">{increase}</span></div>
</a>
"#,
            slug = counter.slug(),
            title = counter.title(),
            total = overview.latest.counter(counter),
            increase = increase_text(increase),
        );
    }

    let datasets = [
        dataset_js(Counter::Watchdog, &overview.watchdog)?,
        dataset_js(Counter::Staff, &overview.staff)?,
    ]
    .join(",\n");
    let script = chart_script(
        "banChart",
        &serde_json::to_string(&overview.watchdog.labels)?,
        &datasets,
    );

    let body = format!(
        r#"<h1>Punishment Stats</h1>
<div class="stats-container">
{boxes}</div>
<div class="chart-container"><canvas id="banChart"></canvas></div>
<p class="last-updated">Last updated: {updated}</p>
<p class="footer">Counters are polled from the upstream stats endpoint and kept in memory only.</p>"#,
        updated = view::last_updated(overview.latest.captured_at),
    );
    Ok(layout("Punishment Stats", &body, &script))
}

pub fn counter_page(
    counter: Counter,
    series: &Series,
    latest: &Sample,
) -> Result<String, serde_json::Error> {
    let title = format!("{} Stats", counter.title());
    let canvas = format!("{}Chart", counter.slug());
    let script = chart_script(
        &canvas,
        &serde_json::to_string(&series.labels)?,
        &dataset_js(counter, series)?,
    );
    let body = format!(
        r#"<h1>{title}</h1>
<div class="chart-container"><canvas id="{canvas}"></canvas></div>
<p class="last-updated">Last updated: {updated}</p>
<p><a href="/">Back to main page</a></p>"#,
        updated = view::last_updated(latest.captured_at),
    );
    Ok(layout(&title, &body, &script))
}

fn dataset_js(counter: Counter, series: &Series) -> Result<String, serde_json::Error> {
    Ok(format!(
        r#"{{ label: '{title} Bans (Total)', data: {values}, borderColor: '{color}', yAxisID: 'total' }},
{{ label: '{title} Bans (Change)', data: {changes}, borderColor: '{color}', borderDash: [5, 5], yAxisID: 'change' }}"#,
        title = counter.title(),
        color = counter.color(),
        values = serde_json::to_string(&series.values)?,
        changes = serde_json::to_string(&series.step_changes())?,
    ))
}

fn chart_script(canvas_id: &str, labels_json: &str, datasets: &str) -> String {
    format!(
        r#"document.addEventListener('DOMContentLoaded', () => {{
    const ctx = document.getElementById('{canvas_id}').getContext('2d');
    new Chart(ctx, {{
        type: 'line',
        data: {{ labels: {labels_json}, datasets: [
{datasets}
        ] }},
        options: {CHART_OPTIONS}
    }});
}});"#
    )
}

fn layout(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{CHART_JS_CDN}"></script>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
{body}
</div>
<script>
{script}
</script>
</body>
</html>
"#
    )
}
