use clap::{Parser, Subcommand};
use fogbind::{config, output, page, site};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fogbind")]
#[command(about = "Bind a JSON content document into static HTML page shells")]
#[command(long_about = "\
Bind a JSON content document into static HTML page shells

Each top-level *.html file in the source directory is a page shell. The page
it represents is decided by its file name; content for that page is read from
the content document and written into the shell's existing anchors. Anything
the document does not provide keeps its static markup.

Site structure:

  site/
  ├── config.toml        # Build config (optional)
  ├── content.json       # Content document
  ├── index.html         # Home
  ├── challenges.html    # Challenges
  ├── dashboard.html     # Dashboard
  ├── register.html      # Register
  ├── about.html         # About
  └── css/, js/, ...     # Copied unchanged

Unknown shell names bind as Home. If the content document cannot be loaded,
every shell is written out unchanged.

Run 'fogbind gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory holding the shells and content document
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log binder decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bind every shell and write the site to the output directory
    Build,
    /// Bind every shell without writing; fail if any page stays static
    Check,
    /// Print the page a location path resolves to
    Resolve {
        /// Location path, e.g. /2026/about.html
        path: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            println!(
                "==> Binding {} → {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = site::build(&cli.source, &cli.output, &site_config)?;
            output::print_site_report(&report, &site_config.binding);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            println!("==> Checking {}", cli.source.display());
            let report = site::check(&cli.source, &site_config)?;
            output::print_site_report(&report, &site_config.binding);
            report.verdict(&site_config.binding)?;
            println!("==> Site is valid");
        }
        Command::Resolve { path } => {
            output::print_resolve(&path, page::resolve(&path));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fogbind={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down,
/// not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
