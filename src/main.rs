use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::Subcommand)]
enum Commands {
    /// Remove junk from a downloaded track title
    Title {
        /// Raw title, e.g. a video title
        raw_title: String,
        /// Album name to strip from the title
        #[arg(long)]
        album: Option<String>,
        /// Artist name to strip from the title
        #[arg(long)]
        artist: Option<String>,
    },
    /// Show the metadata a track's path implies
    Infer {
        /// Path to a track inside an Artist/Album folder
        path: PathBuf,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Fill in missing title, album and artist tags for an album directory
    Tag {
        /// Album directory (Artist/Album)
        album_dir: String,
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Tag every Artist/Album directory in the music library
    Library {
        /// Music directory (defaults to $DLALBUM_MUSIC_DIR, $XDG_MUSIC_DIR or ~/Music)
        music_dir: Option<String>,
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Load environment variables from a .env file if present
    dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Title {
            raw_title,
            album,
            artist,
        } => {
            commands::title::print_clean_title(&raw_title, album.as_deref(), artist.as_deref());
        }
        Commands::Infer { path, json } => {
            commands::infer::print_path_metadata(&path, json)?;
        }
        Commands::Tag {
            album_dir,
            dry_run,
            json,
        } => {
            let album_dir = dlalbum::utils::expand_dir(&album_dir);
            let outcome = commands::tag::tag_album_dir(&album_dir, dry_run)?;
            if json {
                println!("{}", commands::tag::reports_to_json(&outcome.reports)?);
            }
        }
        Commands::Library {
            music_dir,
            dry_run,
            json,
        } => {
            let music_dir = music_dir
                .map(|dir| dlalbum::utils::expand_dir(&dir))
                .unwrap_or_else(dlalbum::utils::get_default_music_dir);
            let outcome = commands::tag::tag_library(&music_dir, dry_run)?;
            if json {
                println!("{}", commands::tag::reports_to_json(&outcome.reports)?);
            }
        }
    }

    Ok(())
}
