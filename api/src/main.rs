//! Heritage Storefront API Server
//!
//! Booking storefront for local cultural experiences in Guwahati: a filtered
//! experience catalog, step wizards for checkout, vendor onboarding and
//! sign-up/sign-in, post-visit feedback, and static language and safety
//! helpers.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::{
    HttpCheckoutGateway, MemoryReviewRepository, SimulatedApplicationGateway,
    SimulatedAuthGateway, SimulatedCheckoutGateway, StaticCatalog,
};
use app::{CatalogService, FeedbackService, Gateways, SupportService, WizardService};
use config::Config;
use domain::ports::{CatalogSource, CheckoutGateway};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<StaticCatalog>>,
    pub wizard_service: Arc<WizardService<StaticCatalog>>,
    pub feedback_service: Arc<FeedbackService<StaticCatalog, MemoryReviewRepository>>,
    pub support_service: Arc<SupportService>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, catalog: StaticCatalog, gateways: Gateways) -> Self {
        let catalog = Arc::new(catalog);
        let reviews = Arc::new(MemoryReviewRepository::new());

        Self {
            catalog_service: Arc::new(CatalogService::new(catalog.clone())),
            wizard_service: Arc::new(WizardService::new(
                catalog.clone(),
                gateways,
                config.max_upload_bytes,
                config.default_slot.clone(),
            )),
            feedback_service: Arc::new(FeedbackService::new(catalog, reviews)),
            support_service: Arc::new(SupportService::new()),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router over a prepared state
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let mut account_routes = Router::new()
        .route("/signup", post(handlers::start_signup))
        .route("/signin", post(handlers::start_signin));

    if state.config.rate_limit {
        // 2 req/sec sustained, burst of 5, keyed by peer IP
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(5)
                .finish()
                .context("invalid rate limit settings")?,
        );
        account_routes = account_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        // Catalog
        .route("/experiences", get(handlers::list_experiences))
        .route("/experiences/facets", get(handlers::get_facets))
        .route("/experiences/:id", get(handlers::get_experience))
        .route("/experiences/:id/phrases", get(handlers::get_phrases))
        .route(
            "/experiences/:id/feedback",
            get(handlers::list_feedback).post(handlers::submit_feedback),
        )
        .route("/vendors/:id", get(handlers::get_vendor))
        // Wizards
        .route("/checkout/:experience_id", post(handlers::start_checkout))
        .route("/onboarding", post(handlers::start_onboarding))
        .merge(account_routes)
        .route(
            "/sessions/:id",
            get(handlers::get_session).delete(handlers::close_session),
        )
        .route("/sessions/:id/fields", patch(handlers::update_fields))
        .route(
            "/sessions/:id/fields/:field/toggle",
            post(handlers::toggle_item),
        )
        .route("/sessions/:id/uploads", post(handlers::attach_upload))
        .route("/sessions/:id/advance", post(handlers::advance))
        .route("/sessions/:id/back", post(handlers::back))
        // Language & safety helpers
        .route("/support/phrases", get(handlers::phrasebook))
        .route("/support/translate", post(handlers::translate))
        .route("/support/safety-points", get(handlers::safety_points))
        .route(
            "/support/emergency-contacts",
            get(handlers::emergency_contacts),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn gateways(config: &Config) -> Gateways {
    let checkout: Arc<dyn CheckoutGateway> = match &config.checkout_url {
        Some(url) => {
            tracing::info!(checkout_url = %url, "Using remote checkout backend");
            Arc::new(HttpCheckoutGateway::new(url.clone()))
        }
        None => Arc::new(SimulatedCheckoutGateway::new(config.checkout_delay)),
    };

    Gateways {
        checkout,
        auth: Arc::new(SimulatedAuthGateway::new(config.auth_delay)),
        applications: Arc::new(SimulatedApplicationGateway::new(config.onboarding_delay)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,heritage_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Heritage Storefront API...");

    // Load configuration
    let config = Config::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading catalog file");
            StaticCatalog::from_json_file(path)
                .with_context(|| format!("failed to load catalog from {}", path))?
        }
        None => StaticCatalog::guwahati().context("built-in catalog is inconsistent")?,
    };
    tracing::info!(
        experiences = catalog.experiences().len(),
        vendors = catalog.vendors().len(),
        "Catalog ready"
    );

    let state = AppState::new(config.clone(), catalog, gateways(&config));
    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
