use anyhow::Result;
use clap::{Parser, Subcommand};
use hero_sieve::commands::{filter_command, parse_command, session_command, tags_command};

/// Smart-text hero filtering CLI.
///
/// This CLI is a thin wrapper around `hero-sieve-core` (exposed in code as
/// `hero_sieve_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "hero-sieve",
    version,
    about = "Filter and select heroes with smart text",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the roster with smart text and show the resolved selection.
    ///
    /// Reads `<base>/heroes.json`. Examples of smart text:
    /// `ajax`, `role:tank f:light`, `s:3-5`, `5*`, `is:shardable`.
    Filter {
        /// Directory containing heroes.json. Overrides the config file's base.
        #[arg(long)]
        base: Option<String>,

        /// Optional selector config (JSON or YAML).
        #[arg(long)]
        config: Option<String>,

        /// Smart text to apply. Empty matches every hero.
        #[arg(long, default_value = "")]
        text: String,

        /// Hero id to click after filtering.
        #[arg(long)]
        select: Option<u32>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show how smart text is interpreted, without loading a roster.
    Parse {
        #[arg(long, default_value = "")]
        text: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Replay an event script against a live session.
    ///
    /// Each line is `text <smart text>`, `click <id>` or `refresh`; blank
    /// lines and `#` comments are skipped. Reads stdin when --script is omitted.
    Session {
        /// Directory containing heroes.json. Overrides the config file's base.
        #[arg(long)]
        base: Option<String>,

        /// Optional selector config (JSON or YAML).
        #[arg(long)]
        config: Option<String>,

        /// Script file to replay.
        #[arg(long)]
        script: Option<String>,

        /// Emit one JSON object per step instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the roles and factions smart text understands.
    Tags {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    hero_sieve::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Filter { base, config, text, select, json } => {
            filter_command(base.as_deref(), config.as_deref(), &text, select, json)?
        }
        Command::Parse { text, json } => parse_command(&text, json)?,
        Command::Session { base, config, script, json } => {
            session_command(base.as_deref(), config.as_deref(), script.as_deref(), json)?
        }
        Command::Tags { json } => tags_command(json)?,
    }

    Ok(())
}
