use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::tracker::TrackLogic;
use crate::errors::AppResult;
use std::io;

/// Run the interactive timer loop on stdin.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { project } = &cli.command {
        let mut logic = TrackLogic::new(cfg.log_dir());
        if !cli.test {
            logic = logic.with_activity_log(Config::activity_log_file());
        }
        logic.run(io::stdin().lock(), project.clone())?;
    }

    Ok(())
}
