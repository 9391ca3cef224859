use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::layout::{LayoutArgs, run_layout};
use crate::logging;
use crate::replay::{ReplayArgs, run_replay};

#[derive(Debug, Parser)]
#[command(
    name = "sheet-harness",
    about = "Replay scripted interactions against a bottom sheet",
    version
)]
pub struct Cli {
    /// Emit sheet spans on stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print layout constants for a viewport.
    Layout(LayoutArgs),

    /// Replay a JSON script and print one JSON line per step.
    Replay(ReplayArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Layout(args) => run_layout(args, out),
        Commands::Replay(args) => run_replay(args, out),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn parses_layout_command() {
        let cli = Cli::try_parse_from(["sheet-harness", "layout", "--height", "844"]).unwrap();
        match cli.command {
            Commands::Layout(args) => {
                assert_eq!(args.height, 844.0);
                assert_eq!(args.width, 390.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_replay_command() {
        let cli = Cli::try_parse_from([
            "sheet-harness",
            "replay",
            "script.json",
            "--frame-ms",
            "8",
            "--config",
            "sheet.toml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Replay(args) => {
                assert_eq!(args.script.to_str(), Some("script.json"));
                assert_eq!(args.frame_ms, 8);
                assert_eq!(args.config.as_deref().and_then(|p| p.to_str()), Some("sheet.toml"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn layout_requires_height() {
        assert!(Cli::try_parse_from(["sheet-harness", "layout"]).is_err());
    }
}
