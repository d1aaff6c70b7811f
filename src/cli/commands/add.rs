use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Log a finished session for today.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        project,
        start,
        end,
    } = &cli.command
    {
        let start = parse_required_time(start)?;
        let end = parse_required_time(end)?;
        let today = date::today();

        let session = AddLogic::build(project, today, start, end)?;
        AddLogic::apply(cfg.log_dir().as_deref(), &session, today)?;

        if !cli.test {
            ttlog_quiet(
                "add",
                &session.project,
                &format!(
                    "{} - {} ({})",
                    session.start_label(),
                    session.end_label(),
                    session.duration_label()
                ),
            );
        }
    }

    Ok(())
}
