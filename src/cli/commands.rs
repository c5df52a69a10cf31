//! Command execution

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Execute the command described by `cli`.
#[instrument(level = "debug", skip(cli))]
pub fn execute(cli: &Cli) -> CliResult<()> {
    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(generator, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }
    if cli.config_template {
        output::info(&Settings::template());
        return Ok(());
    }

    let input = match (&cli.input, cli.show_config) {
        (Some(path), _) => Some(path.as_path()),
        (None, true) => None,
        (None, false) => {
            return Err(CliError::Usage(format!(
                "missing report file\n\n{}",
                Cli::command().render_usage()
            )))
        }
    };

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.no_color {
        settings.color = false;
    }
    if !settings.color {
        output::disable_colors();
    }
    debug!("settings: {:?}", settings);

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }
    let Some(input) = input else {
        return Ok(());
    };

    let container = ServiceContainer::new(settings);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = container.report_service().render_file(
        input,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    debug!(
        "rendered {} of {} projects ({} without dependency data)",
        summary.rendered_count(),
        summary.projects.len(),
        summary.empty_count()
    );
    Ok(())
}
