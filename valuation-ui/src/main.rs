use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use valuation_core::{ApiConfig, BASE_URL_ENV, ValuationService};
use valuation_http::HttpValuationService;
use valuation_ui::{app::ValuatorApp, fonts};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop client for the Saudi property valuation service.
///
/// Collects the property attributes, validates them, and asks the remote
/// prediction API for an estimated value.
#[derive(Debug, Parser)]
struct Cli {
    /// Base URL of the prediction API.
    /// Overrides `VALUATION_API_URL`; defaults to `http://localhost:8000`.
    #[arg(long)]
    api_url: Option<String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ApiConfig::resolve(cli.api_url, std::env::var(BASE_URL_ENV).ok());
    debug!(base_url = %config.base_url, "using valuation service");

    // The runtime outlives the UI loop; submissions are spawned onto it
    // through the handle held by the app.
    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();
    let service: Arc<dyn ValuationService> = Arc::new(HttpValuationService::new(&config));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("تقييم العقار")
            .with_inner_size([920.0, 760.0]),
        ..Default::default()
    };

    info!("starting property valuator");
    eframe::run_native(
        "Property Valuator",
        options,
        Box::new(move |cc| {
            fonts::setup_fonts(&cc.egui_ctx);
            Ok(Box::new(ValuatorApp::new(cc.egui_ctx.clone(), service, handle)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))?;

    Ok(())
}
