use osm_wrangle::cli;
use osm_wrangle::errors::AppResult;
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::cli()
}
