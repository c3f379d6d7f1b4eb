use anyhow::Result;
use assets::bundle::{publish_vendor_assets, BundleOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Publish third-party front-end libraries into the module's vendor
/// resource path. Invoked as part of packaging, not at runtime.
#[derive(Debug, Parser)]
#[command(name = "vendor-assets")]
struct Args {
    /// Front-end dependency cache to publish from
    #[arg(long, default_value = "bower_components")]
    cache_dir: PathBuf,

    /// Vendor resource path inside the packaged module
    #[arg(long, default_value = "target/web/module/resources/vendor")]
    out_dir: PathBuf,

    /// Skip writing precompressed .gz siblings for scripts and stylesheets
    #[arg(long)]
    no_compress: bool,
}

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();
    publish_vendor_assets(&BundleOptions {
        cache_dir: args.cache_dir,
        out_dir: args.out_dir,
        compress: !args.no_compress,
    })?;
    Ok(())
}

fn init_logger() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(false)
                .with_line_number(false)
                .with_target(false),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}
