//! Command dispatch: one handler per subcommand

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::FetchOutcome;
use crate::application::{CheckOptions, FetchOptions};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::{output, CliResult};
use crate::config::{global_config_path, Settings};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;

/// Run the parsed command and return the process exit code.
pub fn execute_command(cli: Cli) -> CliResult<i32> {
    let Cli {
        config, command, ..
    } = cli;
    let config = config.as_deref();

    match command {
        Commands::GetData(args) => get_data(&build_container(config)?, args.into()),
        Commands::CheckTag(args) => check_tag(&build_container(config)?, args.into()),
        Commands::Config { command } => config_command(command, config),
        Commands::Completion { shell } => completion(shell),
    }
}

fn build_container(config: Option<&Path>) -> CliResult<ServiceContainer> {
    let settings = Settings::load(config)?;
    debug!(?settings, "settings loaded");
    Ok(ServiceContainer::new(settings)?)
}

/// `getdata`: print the fetched document. Exit 0 even when no tag was given.
#[instrument(skip(container))]
pub fn get_data(container: &ServiceContainer, options: FetchOptions) -> CliResult<i32> {
    match container.fetch_service().fetch(options)? {
        FetchOutcome::Fetched(document) => output::info(&document),
        FetchOutcome::NoTag => debug!("nothing fetched"),
    }
    Ok(exitcode::OK)
}

/// `checktag`: print the found / not-found / connection-failed line.
#[instrument(skip(container))]
pub fn check_tag(container: &ServiceContainer, options: CheckOptions) -> CliResult<i32> {
    let outcome = container.tag_check_service().check(options)?;
    output::info(&outcome);
    Ok(outcome.exit_code())
}

fn config_command(command: ConfigCommands, config: Option<&Path>) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config)?;
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "unavailable (no home directory)"),
            }
            if let Some(path) = config {
                output::action("explicit", &path.display());
            }
        }
    }
    Ok(exitcode::OK)
}

fn completion(shell: Shell) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(exitcode::OK)
}
