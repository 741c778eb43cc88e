//! Results view — reads the session slot once per render.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use essentialai_common::{ConfidenceBand, ResultsBundle};

use crate::handlers::{escape_html, layout};
use crate::session::session_id;
use crate::state::SharedState;

async fn stored_bundle(state: &SharedState, jar: &CookieJar) -> Option<ResultsBundle> {
    let id = session_id(jar, state.cookie_name())?;
    state.sessions.get(&id).await
}

/// GET /results
pub async fn results_page(State(state): State<SharedState>, jar: CookieJar) -> Html<String> {
    match stored_bundle(&state, &jar).await {
        Some(bundle) => Html(render_results(&bundle)),
        None => Html(render_empty_state()),
    }
}

/// GET /results/download — the stored bundle as a JSON attachment
pub async fn results_download(State(state): State<SharedState>, jar: CookieJar) -> Response {
    let Some(bundle) = stored_bundle(&state, &jar).await else {
        return (StatusCode::NOT_FOUND, "No results stored for this session").into_response();
    };
    match bundle.to_json_pretty() {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"prediction_results.json\""),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Could not serialize results for download: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn render_empty_state() -> String {
    layout("Results", r#"
    <div class="empty-state">
        <div class="card text-center">
            <div class="empty-icon">!</div>
            <h2>No Results Found</h2>
            <p class="text-muted">Please run a prediction first to see results.</p>
            <a href="/predict" class="btn btn-primary">Go to Prediction</a>
        </div>
    </div>"#)
}

fn render_results(bundle: &ResultsBundle) -> String {
    let rows: String = bundle.predictions.iter().map(|p| {
        let band = p.band();
        let width = p.confidence.clamp(0.0, 100.0);
        format!(r#"
            <div class="result-row">
                <div class="d-flex align-center gap-3">
                    <span class="badge badge-outline capitalize">{}</span>
                    <span class="fw-bold">{}% confidence</span>
                </div>
                <div class="progress-track">
                    <div class="progress-bar tier-{}" style="width:{}%"></div>
                </div>
                <p class="text-muted small">{}</p>
            </div>"#,
            escape_html(&p.label), p.confidence, band.color(), width, band.caption())
    }).collect();

    let legend: String = ConfidenceBand::ALL.iter().map(|band| format!(
        r#"<div class="legend-item"><span class="swatch tier-{}"></span><span class="text-muted small">{}</span></div>"#,
        band.color(), escape_html(band.legend())
    )).collect();

    let interpretation = bundle.interpretation();

    let body = format!(r#"
    <div class="page-header text-center">
        <a href="/predict" class="back-link">&larr; Back to Prediction</a>
        <h1 class="page-title">Prediction Results</h1>
        <p class="text-muted">Analysis of your essential oil's biological activities based on chemical properties</p>
    </div>

    <div class="results-grid">
        <div>
            <div class="card">
                <div class="card-header">Biological Activity Predictions</div>
                {}
            </div>
            <div class="d-flex gap-3 mt-4">
                <a href="/predict" class="btn btn-outline btn-lg flex-1">New Prediction</a>
                <a href="/results/download" class="btn btn-primary btn-lg flex-1">Download Results</a>
            </div>
        </div>

        <aside>
            <div class="card">
                <div class="card-header">Results Interpretation</div>
                <h4>{}</h4>
                <p class="text-muted small">{}</p>
                <h4>Recommendation</h4>
                <p class="text-muted small">{}</p>
            </div>
            <div class="card mt-4">
                <div class="card-header">Confidence Levels</div>
                {}
            </div>
            <div class="card mt-4">
                <div class="card-header">Important Notice</div>
                <p class="text-muted small">
                    These predictions are based on machine learning models and should be validated
                    through experimental research before any practical applications.
                </p>
            </div>
            <p class="text-muted small">Source: {} predictor</p>
        </aside>
    </div>"#,
        rows,
        escape_html(&interpretation.summary),
        escape_html(&interpretation.description),
        escape_html(&interpretation.recommendation),
        legend,
        bundle.source,
    );

    layout("Results", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use essentialai_common::{FeatureVector, PredictionResult, PredictorKind};

    #[test]
    fn test_empty_state_copy() {
        let html = render_empty_state();
        assert!(html.contains("No Results Found"));
        assert!(html.contains(r#"href="/predict""#));
    }

    #[test]
    fn test_rows_use_band_tiers() {
        let bundle = ResultsBundle::new(
            vec![
                PredictionResult::new("antimicrobial", 70.0),
                PredictionResult::new("antifungal", 50.0),
                PredictionResult::new("analgesic", 10.0),
            ],
            FeatureVector::zeros(),
            PredictorKind::Static,
        );
        let html = render_results(&bundle);
        assert!(html.contains(r#"progress-bar tier-emerald" style="width:70%""#));
        assert!(html.contains(r#"progress-bar tier-yellow" style="width:50%""#));
        assert!(html.contains(r#"progress-bar tier-gray" style="width:10%""#));
        assert!(html.contains("Strong Activity Profile"));
    }

    #[test]
    fn test_remote_labels_are_escaped() {
        let bundle = ResultsBundle::new(
            vec![PredictionResult::new("<script>x</script>", 80.0)],
            FeatureVector::zeros(),
            PredictorKind::Remote,
        );
        let html = render_results(&bundle);
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
