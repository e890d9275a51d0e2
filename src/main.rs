use clap::Parser;
use roof_route::{
    sdk::config::RoutingConfig,
    sdk::display::{DisplayBoard, Locale},
    sdk::map::{MapContext, MapOptions, RecordingSurface},
    sdk::routing::{Coord, FixtureRouteProvider, RemoteRouteProvider, RoutingProvider},
    sdk::search::RouteSearch,
    sdk::util::log::init_logging,
};
use std::{fs::File, io::Write, path::PathBuf};

/// Shows a walking route and which parts of it are under a roof
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start point as "lat,lng" (default: Tokyo Station)
    #[arg(long, default_value = "35.681406,139.767132")]
    from: Coord,

    /// End point as "lat,lng" (default: Shinbashi Station)
    #[arg(long, default_value = "35.66671917430511,139.75830306946293")]
    to: Coord,

    /// Language for the time and step texts (en, ja)
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// [Optional] Replay a recorded route response instead of calling the API
    #[arg(long)]
    response_file: Option<PathBuf>,

    /// [Optional] Write the issued render commands as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

async fn run<P: RoutingProvider>(cli: &Cli, provider: P) -> anyhow::Result<()> {
    let map = MapContext::new(
        RecordingSurface::default(),
        DisplayBoard::full(),
        MapOptions::default(),
        cli.locale,
    )
    .shared();

    let rendered = RouteSearch::new(provider).search(&map, cli.from, cli.to).await?;

    println!("Time:     {}", rendered.display.time);
    println!("Distance: {}", rendered.display.distance);
    println!("Steps:    {}", rendered.display.steps);
    println!("Calories: {}", rendered.display.calories);
    println!(
        "Covered:  {} of {} segments",
        rendered.covered_segment_count, rendered.segment_count
    );

    if let Some(path) = &cli.output {
        let ctx = map.lock().await;
        let json_output = serde_json::to_string_pretty(&ctx.surface)?;
        let mut file = File::create(path)?;
        file.write_all(json_output.as_bytes())?;
        log::info!("Render commands written to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Searching walking route {} -> {}", cli.from, cli.to);

    match &cli.response_file {
        Some(path) => run(&cli, FixtureRouteProvider::from_file(path)?).await,
        None => {
            let config = RoutingConfig::from_env()?;
            run(&cli, RemoteRouteProvider::new(&config)?).await
        }
    }
}
