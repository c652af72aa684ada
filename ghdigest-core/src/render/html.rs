//! Shared HTML helpers

use chrono::{DateTime, SecondsFormat, Utc};

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/js/bootstrap.bundle.min.js";

/// Escape text for use in element content or a quoted attribute
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make an identity usable inside an element id
///
/// `@`, `.` and `/` become `_`; the result is then HTML-escaped.
pub fn escape_id(identity: &str) -> String {
    escape(&identity.replace(['@', '.', '/'], "_"))
}

/// Short human date, e.g. `Mar 1`
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d").to_string()
}

/// Full timestamp as the API reports it, e.g. `2025-03-01T00:00:00Z`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Wrap a body in the common page skeleton
pub fn page(title: &str, style: &str, with_script: bool, body: &str) -> String {
    let script = if with_script {
        format!("\n    <script src=\"{}\"></script>", BOOTSTRAP_JS)
    } else {
        String::new()
    };
    let style = if style.is_empty() {
        String::new()
    } else {
        format!("\n    <style>{}</style>", style)
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link href="{css}" rel="stylesheet">{script}{style}
</head>
<body class="container mt-5">
{body}
</body>
</html>
"#,
        title = escape(title),
        css = BOOTSTRAP_CSS,
    )
}
