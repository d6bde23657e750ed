//! EnvSafe - a local encrypted store for environment secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envsafe::cli::output;
use envsafe::cli::{execute, Cli, Context};
use envsafe::core::constants::{LOG_ENV, LOG_FORMAT_ENV};
use envsafe::error::{CipherError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envsafe=debug")
        } else {
            EnvFilter::new("envsafe=warn")
        }
    });

    // ENVSAFE_LOG_FORMAT=json switches to structured output
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let (plain_layer, json_layer) = if json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (
            Some(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain_layer)
        .with(json_layer)
        .init();

    let result =
        Context::resolve(cli.file, cli.key).and_then(|ctx| execute(cli.command, &ctx));

    if let Err(e) = result {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingKey) => Some("pass --key or set ENVSAFE_KEY"),
            Error::Config(ConfigError::MissingPrefix) => {
                Some("pass a prefix or set `prefix` in .envsafe.toml")
            }
            Error::Cipher(CipherError::InvalidKeySize(_)) => {
                Some("use a key of exactly 16, 24, or 32 bytes")
            }
            Error::Cipher(CipherError::Authentication) => {
                Some("check that this is the key the secret was stored with")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
