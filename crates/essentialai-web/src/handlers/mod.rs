//! HTTP handlers for all web routes.

pub mod home;
pub mod predict;
pub mod results;
pub mod classic;
pub mod api;

use essentialai_common::{feature_label, FeatureVector, FEATURE_COUNT};
use std::collections::HashMap;

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Wrap a page body in the common document shell.
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — EssentialAI</title>
    <link rel="stylesheet" href="/static/css/main.css?v=1.0.0">
</head>
<body>
{}
<main class="main-content">
{}
</main>
</body>
</html>"#, title, NAV_HTML, body)
}

/// Escape text for safe inclusion in HTML bodies and attribute values.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Read fields `f0`..`f9` from a submitted form.
///
/// Blank or missing fields count as 0.0, the value every control starts at.
pub(crate) fn parse_feature_form(form: &HashMap<String, String>) -> Result<FeatureVector, String> {
    let mut values = Vec::with_capacity(FEATURE_COUNT);
    for i in 0..FEATURE_COUNT {
        let raw = form.get(&format!("f{}", i)).map(|s| s.trim()).unwrap_or("");
        if raw.is_empty() {
            values.push(0.0);
            continue;
        }
        match raw.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => return Err(format!("{} must be a number", feature_label(i))),
        }
    }
    FeatureVector::new(values).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let v = parse_feature_form(&form(&[("f0", "2.5"), ("f9", " 7 ")])).unwrap();
        assert_eq!(v.values()[0], 2.5);
        assert_eq!(v.values()[1], 0.0);
        assert_eq!(v.values()[9], 7.0);
    }

    #[test]
    fn test_non_numeric_field_is_reported_by_label() {
        let err = parse_feature_form(&form(&[("f2", "abc")])).unwrap_err();
        assert_eq!(err, "Chemical Property 3 must be a number");
    }

    #[test]
    fn test_infinite_value_rejected() {
        assert!(parse_feature_form(&form(&[("f0", "inf")])).is_err());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"a" & 'b'</b>"#), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
    }
}
