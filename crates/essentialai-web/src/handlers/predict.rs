//! Slider input form — runs the configured predictor and hands off to /results.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use essentialai_common::{feature_label, FeatureVector, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use essentialai_predict::PREDICTION_FAILED;
use std::collections::HashMap;
use tracing::{error, info, warn};

use crate::handlers::{escape_html, layout, parse_feature_form};
use crate::session::ensure_session;
use crate::state::SharedState;

/// GET /predict — every slider starts at 0.0
pub async fn predict_page() -> Html<String> {
    Html(render_predict_page(&FeatureVector::zeros(), None))
}

/// POST /predict — predict, park the bundle in the session slot, redirect
pub async fn predict_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let features = match parse_feature_form(&form) {
        Ok(f) => f.clamped_to_slider(),
        Err(msg) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_predict_page(&FeatureVector::zeros(), Some(&msg))),
            )
                .into_response();
        }
    };

    let (jar, session) = ensure_session(jar, state.cookie_name());

    let bundle = match state.predictor.predict_bundle(&features).await {
        Ok(b) => b,
        Err(e) => {
            warn!(session = %session, "Prediction failed: {}", e);
            return (jar, Html(render_predict_page(&features, Some(PREDICTION_FAILED)))).into_response();
        }
    };

    if let Err(e) = state.sessions.put(session, &bundle).await {
        error!(session = %session, "Could not store results: {}", e);
        return (jar, Html(render_predict_page(&features, Some(PREDICTION_FAILED)))).into_response();
    }

    info!(session = %session, source = %bundle.source, n = bundle.predictions.len(), "Stored prediction results");
    (jar, Redirect::to("/results")).into_response()
}

fn render_predict_page(values: &FeatureVector, alert: Option<&str>) -> String {
    let alert_html = alert
        .map(|msg| format!(r#"<div class="alert alert-warning">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();

    let sliders: String = values.values().iter().enumerate().map(|(i, v)| {
        let label = feature_label(i);
        format!(r#"
            <div class="slider-field">
                <div class="d-flex justify-between align-center">
                    <label for="f{i}" class="form-label">{label}</label>
                    <output id="f{i}-val" class="value-chip">{v:.1}</output>
                </div>
                <input type="range" id="f{i}" name="f{i}" class="form-range"
                    min="{min}" max="{max}" step="{step}" value="{v}"
                    oninput="document.getElementById('f{i}-val').textContent=Number(this.value).toFixed(1)">
                <div class="d-flex justify-between scale-marks"><span>0.0</span><span>5.0</span><span>10.0</span></div>
            </div>"#,
            i = i, label = label, v = v, min = SLIDER_MIN, max = SLIDER_MAX, step = SLIDER_STEP)
    }).collect();

    let body = format!(r#"
    <div class="page-header text-center">
        <a href="/" class="back-link">&larr; Back to Home</a>
        <h1 class="page-title">Biological Activity Prediction</h1>
        <p class="text-muted">
            Enter the chemical properties of your essential oil to predict its biological activities.
            Adjust the sliders below to match your compound's characteristics.
        </p>
    </div>

    {}

    <div class="card">
        <div class="card-header">Chemical Properties Input</div>
        <form method="POST" action="/predict">
            <div class="slider-grid">{}</div>
            <div class="d-flex gap-3 justify-center mt-4">
                <button type="submit" class="btn btn-primary btn-lg">Predict Activities</button>
                <a href="/predict" class="btn btn-outline btn-lg">Reset Values</a>
            </div>
        </form>
    </div>

    <div class="card mt-4">
        <h3>How to Use This Predictor</h3>
        <ul class="text-muted">
            <li>Adjust each slider to match your essential oil's chemical properties</li>
            <li>Values range from 0.0 to 10.0 representing normalized chemical characteristics</li>
            <li>Click "Predict Activities" to generate predictions</li>
            <li>Results will show confidence scores for various biological activities</li>
        </ul>
    </div>"#, alert_html, sliders);

    layout("Predict", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_ten_sliders_at_zero() {
        let html = render_predict_page(&FeatureVector::zeros(), None);
        assert_eq!(html.matches(r#"type="range""#).count(), 10);
        assert!(html.contains(r#"name="f9""#));
        assert!(html.contains("Chemical Property 10"));
        assert!(!html.contains("alert-warning"));
    }

    #[test]
    fn test_failure_alert_is_rendered() {
        let html = render_predict_page(&FeatureVector::zeros(), Some(PREDICTION_FAILED));
        assert!(html.contains("Prediction failed."));
    }
}
