//! Typed options for each subcommand, independent of clap

use secrecy::SecretString;

use crate::domain::{ServerConnection, DEFAULT_PORT};

/// Connection settings shared by all subcommands.
#[derive(Debug)]
pub struct ServerOptions {
    pub hostname: String,
    pub username: String,
    pub password: SecretString,
    pub port: u16,
}

impl ServerOptions {
    /// Build the connection descriptor.
    ///
    /// The port is only overridden when it differs from [`DEFAULT_PORT`].
    pub fn into_connection(self) -> ServerConnection {
        let mut connection = ServerConnection::new(self.hostname, self.username, self.password);
        if self.port != DEFAULT_PORT {
            connection.set_port(self.port);
        }
        connection
    }
}

/// Options for `getdata`.
#[derive(Debug)]
pub struct FetchOptions {
    pub server: ServerOptions,
    /// Empty means no tag supplied
    pub tag: String,
    pub start_time: String,
    pub end_time: String,
    pub frequency: u32,
}

/// Options for `checktag`.
#[derive(Debug)]
pub struct CheckOptions {
    pub server: ServerOptions,
    pub tag: String,
}
