//! phdq: query a Uniformance PHD historian for tag data and tag existence.
//!
//! Layers, inner to outer: `domain` (request values), `application`
//! (one service per subcommand), `infrastructure` (historian clients and
//! wiring), `cli` (clap parsing and dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
