//! CLI argument definitions using clap
//!
//! `-h` is taken by `--hostname` on the historian subcommands, so they
//! offer help as `--help` only.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use secrecy::SecretString;

use crate::application::{CheckOptions, FetchOptions, ServerOptions};
use crate::cli::{CliError, CliResult};
use crate::domain::DEFAULT_PORT;

/// Query a Uniformance PHD historian for tag data and tag existence
#[derive(Parser, Debug)]
#[command(name = "phdq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file (default: $XDG_CONFIG_HOME/phdq/phdq.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse arguments; clap failures become [`CliError::Parse`].
    pub fn try_parse_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(CliError::Parse)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Returns data from a tag as XML
    #[command(name = "getdata", disable_help_flag = true)]
    GetData(DataArgs),

    /// Checks whether a tag exists on the server
    #[command(name = "checktag", disable_help_flag = true)]
    CheckTag(CheckArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Connection flags shared by `getdata` and `checktag`.
#[derive(Args)]
pub struct ServerArgs {
    /// Historian server name
    #[arg(short = 'h', long, env = "PHD_HOSTNAME", default_value = "MALSHW1")]
    pub hostname: String,

    /// Username
    #[arg(short, long, env = "PHD_USERNAME", default_value = "")]
    pub username: String,

    /// Password
    #[arg(
        short,
        long,
        env = "PHD_PASSWORD",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// Port
    #[arg(short = 'P', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl fmt::Debug for ServerArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerArgs")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .finish()
    }
}

impl From<ServerArgs> for ServerOptions {
    fn from(args: ServerArgs) -> Self {
        Self {
            hostname: args.hostname,
            username: args.username,
            password: SecretString::new(args.password.into()),
            port: args.port,
        }
    }
}

#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Tag
    #[arg(short, long, default_value = "A.RL_AI7361.BATCH")]
    pub tag: String,

    /// Start time, absolute or relative (NOW-1D)
    #[arg(short, long = "starttime", default_value = "NOW-1D")]
    pub start_time: String,

    /// End time
    #[arg(short, long = "endtime", default_value = "NOW")]
    pub end_time: String,

    /// Sample frequency, 0 for raw data
    #[arg(short, long, default_value_t = 0)]
    pub frequency: u32,
}

impl From<DataArgs> for FetchOptions {
    fn from(args: DataArgs) -> Self {
        Self {
            server: args.server.into(),
            tag: args.tag,
            start_time: args.start_time,
            end_time: args.end_time,
            frequency: args.frequency,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Tag
    #[arg(short, long, default_value = "")]
    pub tag: String,
}

impl From<CheckArgs> for CheckOptions {
    fn from(args: CheckArgs) -> Self {
        Self {
            server: args.server.into(),
            tag: args.tag,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
