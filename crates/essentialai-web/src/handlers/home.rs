//! Landing page.

use axum::response::Html;
use crate::handlers::layout;

pub async fn home() -> Html<String> {
    Html(layout("Home", HOME_BODY))
}

const HOME_BODY: &str = r#"
    <section class="hero">
        <div class="hero-tag">AI-Powered Biological Activity Prediction</div>
        <h1 class="hero-title">Essential Oil <span class="text-gradient">Biological Activity</span><br>Predictor</h1>
        <p class="hero-lead">
            Leverage machine learning to predict the biological activities of essential oils.
            The CatBoost-powered model analyzes multiple chemical properties to provide
            science-backed predictions for research and development.
        </p>
        <div class="d-flex gap-3 justify-center">
            <a href="/predict" class="btn btn-primary btn-lg">Start Prediction &rarr;</a>
            <a href="/classic" class="btn btn-outline btn-lg">Classic Form</a>
        </div>
    </section>

    <section class="features">
        <h2 class="section-title">Why Choose Our Predictor?</h2>
        <p class="text-muted text-center">Built with machine learning and validated on comprehensive datasets</p>
        <div class="grid-3">
            <div class="card card-hover">
                <h3>High Accuracy</h3>
                <p class="text-muted">CatBoost algorithm with optimized thresholds for reliable biological activity predictions.</p>
            </div>
            <div class="card card-hover">
                <h3>Multi-Label Classification</h3>
                <p class="text-muted">Predict multiple biological activities at once, each with its own confidence score.</p>
            </div>
            <div class="card card-hover">
                <h3>Scientific Foundation</h3>
                <p class="text-muted">Based on validated datasets with preprocessing, feature scaling and balanced sampling.</p>
            </div>
        </div>
    </section>

    <section class="cta">
        <h2>Ready to Predict Biological Activities?</h2>
        <p>Enter your essential oil's chemical properties and get instant predictions.</p>
        <a href="/predict" class="btn btn-light btn-lg">Start Your Analysis &rarr;</a>
    </section>
"#;
