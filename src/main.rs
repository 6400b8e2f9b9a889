use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use wardrobe_ai::catalog::RuleCatalog;
use wardrobe_ai::closet::{closet_router, ClosetService, Garment, JsonFileWardrobeStore, RepositoryError};
use wardrobe_ai::config::AppConfig;
use wardrobe_ai::error::AppError;
use wardrobe_ai::outfits::{
    outfits_router, ContextSelection, OutfitEngine, RecommendationError, RecommendationService,
    ScoredOutfit,
};
use wardrobe_ai::telemetry;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Wardrobe Outfit Recommender",
    about = "Catalog garments and rank scored outfit combinations from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score and rank outfit combinations without the server
    Outfits {
        #[command(subcommand)]
        command: OutfitsCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum OutfitsCommand {
    /// Rank every combination in a wardrobe document
    Recommend(RecommendArgs),
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Wardrobe document to score (JSON array of garments)
    #[arg(long)]
    wardrobe: PathBuf,
    /// Directory with the eleven rule tables (defaults to the embedded tables)
    #[arg(long)]
    catalog_dir: Option<PathBuf>,
    /// Skin tone / undertone selection (empty leaves the rule unset)
    #[arg(long, default_value = "")]
    skin_tone: String,
    /// Occasion selection
    #[arg(long, default_value = "")]
    occasion: String,
    /// Season/weather selection
    #[arg(long, default_value = "")]
    weather: String,
    /// Body shape / proportion selection
    #[arg(long, default_value = "")]
    body_type: String,
    /// Show only the first N ranked outfits
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Outfits {
            command: OutfitsCommand::Recommend(args),
        } => run_recommend(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(match &config.catalog.rule_table_dir {
        Some(dir) => RuleCatalog::from_dir(dir)?,
        None => RuleCatalog::builtin()?,
    });

    let store = Arc::new(JsonFileWardrobeStore::new(
        config.storage.wardrobe_dir.clone(),
    ));
    let closet = Arc::new(ClosetService::new(store.clone()));
    let recommendations = Arc::new(RecommendationService::new(store, catalog));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(closet_router(closet))
        .merge(outfits_router(recommendations))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "outfit recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        wardrobe,
        catalog_dir,
        skin_tone,
        occasion,
        weather,
        body_type,
        limit,
    } = args;

    let catalog = Arc::new(match catalog_dir {
        Some(dir) => RuleCatalog::from_dir(dir)?,
        None => RuleCatalog::builtin()?,
    });

    let raw = std::fs::read_to_string(&wardrobe)?;
    let garments: Vec<Garment> = serde_json::from_str(&raw).map_err(|err| {
        RecommendationError::from(RepositoryError::Malformed(format!(
            "{}: {err}",
            wardrobe.display()
        )))
    })?;

    let selection = ContextSelection {
        skin_tone,
        occasion,
        weather,
        body_type,
    };

    let engine = OutfitEngine::new(catalog);
    let context = selection
        .validated(engine.catalog())
        .map_err(RecommendationError::from)?;
    let ranked = engine
        .recommend(&garments, &context)
        .map_err(RecommendationError::from)?;

    render_recommendations(&ranked, limit);
    Ok(())
}

fn render_recommendations(outfits: &[ScoredOutfit], limit: Option<usize>) {
    let total = outfits.len();
    let shown = limit.unwrap_or(total).min(total);

    println!("Outfit recommendations");
    println!("{total} combination(s) scored, showing {shown}");

    for (rank, outfit) in outfits.iter().take(shown).enumerate() {
        println!("\nOutfit #{} (score {})", rank + 1, outfit.score);
        for garment in &outfit.combination.garments {
            println!(
                "- {} ({}) | Color: {} | Pattern: {} | Fabric: {} | Texture: {} | Structure: {}",
                garment.name,
                garment.category.label(),
                garment.color,
                garment.pattern,
                garment.fabric,
                garment.texture,
                garment.structure
            );
        }
        if outfit.reasons.is_empty() {
            println!("Reasons: none");
        } else {
            println!("Reasons: {}", outfit.reasons.join(", "));
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
