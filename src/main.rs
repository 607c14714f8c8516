use carousel::{config, generate, imaging::RustBackend, output, paths::PathMapper};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Static photo-gallery generator")]
#[command(long_about = "\
Static photo-gallery generator

Your directory tree is the gallery. Every directory becomes an index page,
every photo becomes a page of its own with previous/next links.

Source structure:

  gallery/
  ├── .carousel.toml               # Config (optional)
  ├── 01_Trip2024/                 # Album; the 01_ prefix only orders it
  │   ├── .preview.jpeg            # Album preview (optional, else first photo)
  │   ├── a.jpg
  │   └── b.jpg
  └── 2019/
      └── Hawaii/
          └── 001.jpg              # Published as Hawaii_2019_001_view.jpg etc.

Files starting with the hidden marker (default '.') are never photos.

Run 'carousel gen-config' to generate a documented .carousel.toml.")]
#[command(version)]
struct Cli {
    /// Source gallery directory
    #[arg(long, default_value = "gallery", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Config file (defaults to <source>/.carousel.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every page and image at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the whole site
    Build,
    /// Walk the source tree and report what a build would produce
    Check,
    /// Print the page model of a source photo or directory as JSON
    Model {
        /// Photo or directory, relative to the source directory
        path: PathBuf,
    },
    /// Print a stock .carousel.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Build => {
            let site_config = load_config(&cli)?;
            let summary = generate::generate(
                &site_config,
                &cli.source,
                &cli.output,
                &RustBackend::new(),
            )?;
            output::print_build_output(&summary, &cli.output);
        }
        Command::Check => {
            let site_config = load_config(&cli)?;
            let mapper = PathMapper::new(&site_config, &cli.source, &cli.output);
            println!("==> Checking {}", cli.source.display());
            let rows = generate::survey(&mapper, &site_config)?;
            output::print_check_output(&rows);
        }
        Command::Model { path } => {
            let site_config = load_config(&cli)?;
            let mapper = PathMapper::new(&site_config, &cli.source, &cli.output);
            let page = generate::describe(&mapper, &site_config, &RustBackend::new(), path)?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr so `model` output stays pipeable. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "carousel=debug" } else { "carousel=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => {
            std::fs::metadata(path)?;
            config::load_config_file(path)
        }
        None => config::load_config(&cli.source),
    }
}
