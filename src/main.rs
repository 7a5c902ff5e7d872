//! shoptrack CLI - preference tracking for the One Shop storefront.

use clap::{Parser, Subcommand};
use shoptrack::cli;
use std::process::ExitCode;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("SHOPTRACK_GIT_HASH");
    const IS_RELEASE: &str = env!("SHOPTRACK_IS_RELEASE");

    // Use a static to avoid repeated allocations
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "shoptrack")]
#[command(author, version = version(), about = "Preference tracking for the One Shop storefront", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a page visit (the page-load entry point).
    Visit {
        /// Page identifier, e.g. "cars" or "cars/detail".
        page: String,

        /// Client user-agent string (falls back to SHOPTRACK_USER_AGENT).
        #[arg(short, long)]
        user_agent: Option<String>,
    },

    /// Record an item detail view.
    View {
        /// Item identifier.
        item_id: String,

        /// Category the item belongs to.
        category: String,
    },

    /// Record a tag click.
    Tag {
        /// The clicked tag.
        tag: String,
    },

    /// Record a search.
    Search {
        /// The search term, verbatim.
        term: String,
    },

    /// Record the preferred sort order.
    Sort {
        /// Sort order identifier, e.g. "price-asc".
        order: String,
    },

    /// Record the preferred price range.
    Price {
        /// Lower bound.
        min: f64,

        /// Upper bound.
        max: f64,
    },

    /// Classify and store the client device.
    Device {
        /// Client user-agent string (falls back to SHOPTRACK_USER_AGENT).
        #[arg(short, long)]
        user_agent: Option<String>,
    },

    /// Force a session boundary.
    Session,

    /// Show the derived personalization summary.
    Summary {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Dump the raw stored record.
    Show,

    /// Delete the stored record.
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Visit { page, user_agent } => cli::visit::run(&page, user_agent),
        Commands::View { item_id, category } => cli::view::run(&item_id, &category),
        Commands::Tag { tag } => cli::tag::run(&tag),
        Commands::Search { term } => cli::search::run(&term),
        Commands::Sort { order } => cli::prefer::run_sort(&order),
        Commands::Price { min, max } => cli::prefer::run_price(min, max),
        Commands::Device { user_agent } => cli::device::run(user_agent),
        Commands::Session => cli::session::run(),
        Commands::Summary { json } => cli::summary::run(json),
        Commands::Show => cli::show::run(),
        Commands::Clear => cli::clear::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shoptrack: error: {e}");
            ExitCode::FAILURE
        }
    }
}
