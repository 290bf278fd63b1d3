//! Status page HTML rendering
//!
//! Pure templating: takes a [`ClockSnapshot`] and the page settings and
//! produces the document. No clock access happens here.

use crate::clock::ClockSnapshot;
use crate::config::PageConfig;
use crate::duration::describe;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

/// Shown when no positive uptime can be computed
pub const NO_UPTIME: &str = "No uptime";
/// Shown when no positive downtime can be computed
pub const NO_DOWNTIME: &str = "No downtime";

const STYLE: &str = r#"
        body {
            font-family: 'Arial', sans-serif;
            margin: 0;
            padding: 0;
            background-color: #ecf0f1;
            color: #34495e;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
        }

        h2 {
            margin-bottom: 10px;
            font-size: 1.5em;
            color: #2c3e50;
        }

        .button-container {
            display: flex;
            flex-direction: column;
            align-items: center;
            margin-top: 20px;
        }

        .button {
            margin-top: 10px;
            padding: 10px;
            font-size: 16px;
            text-align: center;
            text-decoration: none;
            cursor: pointer;
            border-radius: 5px;
            color: #fff;
            transition: background-color 0.3s;
            width: 100%;
            max-width: 300px;
        }

        .button-green {
            background-color: #3498db;
        }

        .button-green:hover {
            background-color: #2980b9;
        }

        .button-red {
            background-color: #e74c3c;
        }

        .button-red:hover {
            background-color: #c0392b;
        }
"#;

/// Values substituted into the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Process start, already formatted
    pub started_at: String,
    /// Uptime text or [`NO_UPTIME`]
    pub uptime: String,
    /// Downtime text or [`NO_DOWNTIME`]
    pub downtime: String,
    /// Render time, already formatted
    pub now: String,
}

impl StatusView {
    /// Build the view in the server's local time zone.
    pub fn from_snapshot(snapshot: &ClockSnapshot) -> Self {
        Self::from_snapshot_in(snapshot, &Local)
    }

    /// Build the view with timestamps shown in `tz`.
    pub fn from_snapshot_in<Tz>(snapshot: &ClockSnapshot, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            started_at: format_timestamp(&snapshot.started_at.with_timezone(tz)),
            uptime: describe(snapshot.uptime_secs, NO_UPTIME),
            downtime: describe(snapshot.downtime_secs, NO_DOWNTIME),
            now: format_timestamp(&snapshot.now.with_timezone(tz)),
        }
    }
}

/// en-US style `M/D/YYYY, h:mm:ss AM`
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Render the full status document.
pub fn render(config: &PageConfig, view: &StatusView) -> String {
    let app = escape_html(&config.app_name);

    let mut buttons = String::new();
    for link in &config.links {
        let _ = write!(
            buttons,
            "\n        <a class=\"{}\" href=\"{}\" target=\"_blank\">{}</a>",
            link.style.css_class(),
            escape_html(&link.href),
            escape_html(&link.label),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
    <link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">
    <link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">
    <link rel="manifest" href="/site.webmanifest">
    <title>{app} Status</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>{app} is ready!</h1>
    <h2>Server Start Time: {started_at}</h2>
    <h2>Uptime: {uptime}</h2>
    <h2>Downtime: {downtime}</h2>
    <h2>Current Date and Time: {now}</h2>

    <div class="button-container">{buttons}
    </div>
</body>
</html>
"#,
        started_at = view.started_at,
        uptime = view.uptime,
        downtime = view.downtime,
        now = view.now,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
