use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use todo_tui::{config, logging, tui};

#[derive(Parser)]
#[command(
    name = "todo-tui",
    version = todo_tui::VERSION,
    about = "A keyboard-driven TODO list manager for the terminal"
)]
struct Cli {
    /// Config file to use instead of ~/.todo-tui/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the TUI (default)
    Ui,
    /// Create the config directory and a commented default config.toml
    Init,
    /// Print all key bindings
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Init => {
            let path = match cli.config {
                Some(path) => path,
                None => {
                    config::ensure_dirs()?;
                    config::config_path()?
                }
            };
            if config::write_default(&path)? {
                println!("Wrote default config to {}", path.display());
            } else {
                println!("Config already exists at {}", path.display());
            }
            Ok(())
        }
        Commands::Keys => {
            let keymap = tui::KeyMap::default_keymap();
            for (category, entries) in keymap.help_entries() {
                println!("{category}:");
                for e in entries {
                    println!("  {:<16} {}", e.label.trim_start(), e.description);
                }
            }
            Ok(())
        }
        Commands::Ui => {
            let cfg = config::load(cli.config.as_deref())?;
            logging::init(&cfg.log)?;
            let result = tui::run(&cfg);
            if let Err(ref e) = result {
                tracing::error!("exiting with error: {e:#}");
            } else {
                tracing::info!("exited cleanly");
            }
            result
        }
    }
}
