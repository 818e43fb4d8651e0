//! Command-line and environment configuration.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::FixedOffset;
use clap::Parser;

/// Development backend for the project board
#[derive(Parser, Debug, Clone)]
#[command(name = "project-board-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5970")]
    pub port: u16,

    /// Directory holding the built frontend
    #[arg(long, env = "PROJECT_BOARD_STATIC_DIR", default_value = "crates/frontend/dist")]
    pub static_dir: PathBuf,

    /// Accepted login, as name:password (repeatable)
    #[arg(
        short,
        long = "user",
        env = "PROJECT_BOARD_USERS",
        value_delimiter = ',',
        default_value = "admin:admin"
    )]
    pub users: Vec<UserSpec>,

    /// Offset for deadlines sent without a zone, e.g. +02:00
    /// (defaults to the host's local zone)
    #[arg(long, env = "PROJECT_BOARD_UTC_OFFSET")]
    pub utc_offset: Option<FixedOffset>,
}

/// A `name:password` pair given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSpec {
    pub username: String,
    pub password: String,
}

impl FromStr for UserSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, password) = s
            .split_once(':')
            .ok_or_else(|| format!("expected name:password, got {s:?}"))?;

        if username.is_empty() || password.is_empty() {
            return Err(format!("empty name or password in {s:?}"));
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
