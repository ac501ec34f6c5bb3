//! Campus kernel command line.
//!
//! Composes school website pages from a content snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use campus_kernel::cli::{self, RenderOptions};
use campus_kernel::config::{Config, OutputFormat};
use campus_kernel::models::Position;
use campus_kernel::services::Direction;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Content snapshot (JSON or YAML). Overrides CAMPUS_SNAPSHOT.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a page and print it.
    Render {
        /// Route name of the page (home, news-detail, ...). Overrides CAMPUS_PAGE.
        #[arg(long)]
        page: Option<String>,

        /// Only compose this position (main or sidebar).
        #[arg(long)]
        position: Option<String>,

        /// Output format. Overrides CAMPUS_OUTPUT.
        #[arg(long)]
        output: Option<OutputFormat>,

        /// Template override directory. Overrides CAMPUS_THEME_DIR.
        #[arg(long)]
        theme: Option<PathBuf>,

        /// Date for calendar blocks (YYYY-MM-DD).
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// List blocks by position and sort order.
    Blocks,

    /// Move a block one step within its position.
    Move {
        /// Block id.
        id: String,

        #[arg(value_enum)]
        direction: MoveDirection,
    },

    /// Show the admin menu visible to a role.
    Menu {
        /// admin, editor or guest.
        role: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(snapshot) = args.snapshot {
        config.snapshot_path = Some(snapshot);
    }

    match args.command {
        Command::Render {
            page,
            position,
            output,
            theme,
            today,
        } => {
            if let Some(page) = page {
                config.page = page;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if theme.is_some() {
                config.theme_dir = theme;
            }
            let position = match position.as_deref() {
                Some(raw) => match Position::parse(raw) {
                    Some(position) => Some(position),
                    None => bail!("unknown position '{raw}' (expected main or sidebar)"),
                },
                None => None,
            };

            info!(page = %config.page, output = %config.output, "rendering");
            cli::cmd_render(&config, &RenderOptions { position, today })
        }
        Command::Blocks => cli::cmd_blocks(&config),
        Command::Move { id, direction } => cli::cmd_move(&config, &id, direction.into()),
        Command::Menu { role } => cli::cmd_menu(&role),
    }
}

/// Initialize tracing with environment filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
