use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use beatsweep::app::commands;
use beatsweep::app::events::UserEvent;
use beatsweep::app::proxy::EventProxy;
use beatsweep::app::state::AppState;
use beatsweep::config::settings;
use beatsweep::core::{DeletionOutcome, FilterCriteria};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scan and prune osu!-style beatmap folders by key count, game mode and video assets",
    long_about = None
)]
struct Args {
    /// Beatmap root directory (defaults to the previously selected one)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List beatmap folders matching the filters
    Scan(FilterArgs),
    /// Delete matching folders, or only the matching difficulty files when
    /// --keys or --mode is given
    Delete {
        #[command(flatten)]
        filters: FilterArgs,
        /// Restrict deletion to these folder names (defaults to all matches)
        folders: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Delete video files from the given folders (default: every folder),
    /// keeping the folders and their difficulty files
    DeleteVideos {
        folders: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show folder and descriptor counts for the library
    Stats,
}

#[derive(clap::Args, Debug)]
struct FilterArgs {
    /// Title substring matched against file names (case-insensitive)
    #[arg(long, default_value = "")]
    title: String,

    /// Key count, e.g. 4 or 7
    #[arg(long, default_value = "")]
    keys: String,

    /// Game mode: a code 0-3 or std/taiko/ctb/mania (default: all)
    #[arg(long, default_value = "all")]
    mode: String,

    /// Match every folder regardless of title
    #[arg(long)]
    all: bool,

    /// Only match folders that contain a video asset
    #[arg(long)]
    video_only: bool,
}

impl FilterArgs {
    fn into_criteria(self) -> Result<FilterCriteria> {
        Ok(FilterCriteria::from_input(
            &self.title,
            &self.keys,
            &self.mode,
            self.all,
            self.video_only,
        )?)
    }
}

/// Renders engine events on the terminal.
struct ConsolePresenter;

impl EventProxy for ConsolePresenter {
    fn send_event(&self, event: UserEvent) {
        match event {
            UserEvent::ScanProgress(progress) => {
                print!(
                    "\rScanning {}/{}...",
                    progress.folders_processed, progress.folders_total
                );
                let _ = io::stdout().flush();
                if progress.folders_processed == progress.folders_total {
                    println!();
                }
            }
            UserEvent::ScanComplete(matches) => {
                for name in &matches {
                    println!("{name}");
                }
                println!("Found: {}", matches.len());
            }
            UserEvent::DeletionComplete(outcome) => print_outcome(&outcome),
            UserEvent::StatsReady(stats) => {
                println!("Beatmap folders: {}", stats.folder_count);
                println!("Descriptor files: {}", stats.descriptor_count);
            }
            UserEvent::Error(message) => eprintln!("Error: {message}"),
        }
    }
}

fn print_outcome(outcome: &DeletionOutcome) {
    println!("Deleted {} item(s).", outcome.deleted);
    for error in &outcome.errors {
        eprintln!("Failed on {}: {}", error.path.display(), error.reason);
    }
}

fn prompt_confirm(prompt: &str) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        print!("{prompt} (y/N): ");
        io::stdout().flush()?;

        input.clear();
        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" | "" => return Ok(false),
            _ => continue,
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut state = AppState::default();

    if let Some(root) = args.root {
        state.select_directory(root)?;
    } else if state.current_path.is_none() {
        if let Some(root) = settings::default_songs_directory() {
            tracing::info!("Using detected songs directory {}", root.display());
            state.select_directory(root)?;
        }
    }
    if state.current_path.is_none() {
        anyhow::bail!("no beatmap directory selected; pass --root <DIR>");
    }

    let presenter = ConsolePresenter;
    match args.command {
        Command::Scan(filters) => {
            let criteria = filters.into_criteria()?;
            commands::scan(&mut state, &criteria, &presenter);
        }
        Command::Delete {
            filters,
            folders,
            yes,
        } => {
            let criteria = filters.into_criteria()?;
            if folders.is_empty() {
                commands::scan(&mut state, &criteria, &presenter);
            } else {
                state.last_matches = folders;
            }
            if state.last_matches.is_empty() {
                println!("Nothing to delete.");
                return Ok(());
            }
            let count = state.last_matches.len();
            let confirmed = yes
                || prompt_confirm(&format!(
                    "Delete {count} matching beatmap folder(s)? This cannot be undone."
                ))?;
            if confirmed {
                commands::delete_matching(&mut state, &[], &criteria, &presenter);
            }
        }
        Command::DeleteVideos { folders, yes } => {
            if folders.is_empty() {
                // Every folder is a candidate; the engine only touches the
                // ones that actually contain video files.
                let criteria = FilterCriteria {
                    match_all: true,
                    ..Default::default()
                };
                commands::scan(&mut state, &criteria, &presenter);
            } else {
                state.last_matches = folders;
            }
            if state.last_matches.is_empty() {
                println!("Nothing to delete.");
                return Ok(());
            }
            let count = state.last_matches.len();
            let confirmed = yes
                || prompt_confirm(&format!(
                    "Delete video files from {count} beatmap folder(s)? This cannot be undone."
                ))?;
            if confirmed {
                commands::delete_videos(&mut state, &[], &presenter);
            }
        }
        Command::Stats => commands::stats(&state, &presenter),
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
