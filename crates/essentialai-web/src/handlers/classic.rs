//! Classic numeric form — posts straight to the hosted model and shows `data[0]` inline.

use axum::{extract::State, response::Html, Form};
use essentialai_common::{feature_label, FEATURE_COUNT};
use essentialai_predict::{remote::display_text, PREDICTION_FAILED};
use std::collections::HashMap;
use tracing::warn;

use crate::handlers::{escape_html, layout, parse_feature_form};
use crate::state::SharedState;

/// GET /classic
pub async fn classic_page() -> Html<String> {
    Html(render_classic_page(&vec!["0".to_string(); FEATURE_COUNT], ""))
}

/// POST /classic — every failure collapses to "Prediction failed."
pub async fn classic_submit(
    State(state): State<SharedState>,
    Form(form): Form<HashMap<String, String>>,
) -> Html<String> {
    let submitted = submitted_values(&form);
    let features = match parse_feature_form(&form) {
        Ok(f) => f,
        Err(msg) => {
            warn!("Rejected classic form input: {}", msg);
            return Html(render_classic_page(&submitted, PREDICTION_FAILED));
        }
    };

    let result = match state.remote.invoke_raw(&features).await {
        Ok(output) => display_text(&output),
        Err(e) => {
            warn!("Remote prediction failed: {}", e);
            PREDICTION_FAILED.to_string()
        }
    };

    Html(render_classic_page(&submitted, &result))
}

/// Raw `f0..f9` strings as typed, so a rejected form keeps the user's input.
fn submitted_values(form: &HashMap<String, String>) -> Vec<String> {
    (0..FEATURE_COUNT)
        .map(|i| form.get(&format!("f{}", i)).cloned().unwrap_or_default())
        .collect()
}

fn render_classic_page(values: &[String], result: &str) -> String {
    let fields: String = values.iter().enumerate().map(|(i, v)| format!(
        r#"<div class="number-field"><label for="f{i}">{label}:</label> <input type="number" id="f{i}" name="f{i}" step="0.1" value="{v}" class="form-control"></div>"#,
        i = i, label = feature_label(i), v = escape_html(v),
    )).collect();

    let body = format!(r#"
    <div class="card classic">
        <h1 class="page-title">Essential Oil Activity Predictor</h1>
        <form method="POST" action="/classic">
            {}
            <button type="submit" class="btn btn-primary mt-4">Predict</button>
        </form>
        <div class="mt-4"><strong>Result:</strong> <span id="result">{}</span></div>
    </div>"#, fields, escape_html(result));

    layout("Classic Predictor", &body)
}
