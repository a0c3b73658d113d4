use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use courtmap_lib::application::ports::Geocoder;
use courtmap_lib::domain::constants::MARKER_LAYER_ID;
use courtmap_lib::domain::value_objects::{MapBounds, ScreenSize};
use courtmap_lib::infrastructure::map::HeadlessMapSurface;
use courtmap_lib::infrastructure::navigation::MemoryHistory;
use courtmap_lib::presentation::dto::ApiResponse;
use courtmap_lib::presentation::dto::court_dto::{ListCourtsRequest, MapBoundsDto};
use courtmap_lib::shared::AppConfig;
use courtmap_lib::{AppState, init_logging};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "courtmap")]
#[command(about = "Basketball court map client (headless)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; COURTMAP_* environment variables override it
    #[arg(short, long, env = "COURTMAP_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Args, Clone, Copy)]
struct BoundsArgs {
    #[arg(long, requires_all = ["south", "east", "west"])]
    north: Option<f64>,
    #[arg(long)]
    south: Option<f64>,
    #[arg(long)]
    east: Option<f64>,
    #[arg(long)]
    west: Option<f64>,
}

impl BoundsArgs {
    fn to_dto(self) -> Option<MapBoundsDto> {
        Some(MapBoundsDto {
            north: self.north?,
            south: self.south?,
            east: self.east?,
            west: self.west?,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the marker layer the map would draw
    Markers {
        /// Location path such as /court/3
        #[arg(long, default_value = "/")]
        path: String,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// List courts, optionally filtered by name or address
    Courts {
        #[arg(short, long)]
        query: Option<String>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Look up the coordinates of an address (needs COURTMAP_KAKAO_API_KEY)
    Geocode { address: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?.with_env_overrides(),
        None => AppConfig::from_env(),
    };
    info!("Starting courtmap v{}", env!("CARGO_PKG_VERSION"));

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    match cli.command {
        Commands::Markers { path, bounds } => run_markers(config, &path, bounds, &cancel).await,
        Commands::Courts { query, bounds } => run_courts(config, query, bounds, &cancel).await,
        Commands::Geocode { address } => run_geocode(config, &address).await,
    }
}

async fn run_markers(
    config: AppConfig,
    path: &str,
    bounds: BoundsArgs,
    cancel: &CancellationToken,
) -> Result<()> {
    let history = Arc::new(MemoryHistory::new(path));
    let state = AppState::new(config, history)?;

    let bounds = bounds
        .to_dto()
        .map(MapBounds::try_from)
        .transpose()
        .map_err(|e| anyhow!(e))?;
    state.store.set_map_bounds(bounds);
    state.bootstrap(cancel).await?;

    let viewport = ScreenSize::new(1280.0, 800.0);
    let initial = match bounds {
        Some(bounds) => bounds,
        None => state.config.map.initial_bounds(viewport)?,
    };
    let surface = Arc::new(HeadlessMapSurface::new(initial));
    let (adapter, _signals) = state.mount_map(surface.clone(), viewport)?;
    let layer = surface
        .layer(MARKER_LAYER_ID)
        .context("marker layer was not drawn")?;
    adapter.unmount().await;

    println!("{}", serde_json::to_string_pretty(&layer)?);
    Ok(())
}

async fn run_courts(
    config: AppConfig,
    query: Option<String>,
    bounds: BoundsArgs,
    cancel: &CancellationToken,
) -> Result<()> {
    let state = AppState::new(config, Arc::new(MemoryHistory::default()))?;
    let result = state
        .court_handler
        .list_courts(
            ListCourtsRequest {
                bounds: bounds.to_dto(),
                query,
            },
            cancel,
        )
        .await;
    let failed = result.is_err();
    println!(
        "{}",
        serde_json::to_string_pretty(&ApiResponse::from_result(result))?
    );
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_geocode(config: AppConfig, address: &str) -> Result<()> {
    let state = AppState::new(config, Arc::new(MemoryHistory::default()))?;
    let geocoder = state
        .geocoder
        .context("Kakao API key is not configured (COURTMAP_KAKAO_API_KEY)")?;
    let coordinates = geocoder.coordinates_for(address).await?;
    println!("{coordinates}");
    Ok(())
}
