use crate::config::Config;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::ui::messages::{success, warning};
use crate::utils::path::existing_dir;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file, keeping any directory already configured
///  - the log directory, when `--dir` is given
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut cfg = cfg.clone();

    if let Some(dir) = &cli.dir {
        let resolved = existing_dir(dir)?;
        cfg.set_log_directory(&resolved);
    }

    println!("⚙️  Initializing rworklog…");

    if cli.test {
        warning("Test mode: configuration file not written");
    } else {
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }

    match cfg.log_dir() {
        Some(dir) => println!("📁 Log file    : {}", dir.join(crate::core::markdown::LOG_FILE_NAME).display()),
        None => warning("No log directory yet: run `rworklog config --set-dir <DIR>`"),
    }

    if !cli.test {
        ttlog_quiet(
            "init",
            "",
            &format!("Configuration initialized at {}", Config::config_file().display()),
        );
    }

    success("rworklog initialization completed!");
    Ok(())
}
