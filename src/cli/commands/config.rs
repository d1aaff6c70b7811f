use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        set_dir,
        edit_config,
        editor,
    } = &cli.command
    {
        let mut cfg = cfg.clone();

        // ---- SET DIR (first, so --print/--check show the new value) ----
        if let Some(dir) = set_dir {
            let resolved = ConfigLogic::set_dir(&mut cfg, dir, cli.test)?;
            if !cli.test {
                ttlog_quiet(
                    "config",
                    "log_directory",
                    &format!("log directory set to {}", resolved.display()),
                );
            }
        }

        if *print_config {
            ConfigLogic::print(&cfg)?;
        }

        if *check {
            ConfigLogic::check(&cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&Config::config_file(), editor)?;
        }

        if set_dir.is_none() && !*print_config && !*check && !*edit_config {
            info("Nothing to do: use --print, --check, --set-dir or --edit.");
        }
    }

    Ok(())
}
