//! CLI surface for the seeder. Arguments fall back to environment variables
//! so the tool can run non-interactively in provisioning scripts.

use anyhow::{Context, Result, bail};
use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::io::{self, BufRead};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// What the tool was asked to produce.
#[derive(Debug)]
pub struct Action {
    pub email: String,
    pub password: String,
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Hash,
    Json,
}

pub fn command() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("seed_admin")
        .about("Produces the Argon2id credential seed for the initial admin account")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Email address of the initial admin account")
                .env("SEED_ADMIN_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Password to hash; use '-' to read a single line from stdin")
                .env("SEED_ADMIN_PASSWORD")
                .required(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(["hash", "json"])
                .default_value("json"),
        )
}

/// Parses the command line, initializes logging, and resolves the action.
pub fn start() -> Result<Action> {
    let matches = command().get_matches();

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    let subscriber = Registry::default()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    let email = matches
        .get_one::<String>("email")
        .map(|value| value.trim().to_string())
        .unwrap_or_default();
    if email.is_empty() {
        bail!("email must not be empty");
    }

    let mut password = matches
        .get_one::<String>("password")
        .cloned()
        .unwrap_or_default();
    if password == "-" {
        password = read_password_from_stdin()?;
    }
    if password.trim().is_empty() {
        bail!("password must not be empty");
    }

    let format = match matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json")
    {
        "hash" => OutputFormat::Hash,
        _ => OutputFormat::Json,
    };

    Ok(Action {
        email,
        password,
        format,
    })
}

fn read_password_from_stdin() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::command;

    #[test]
    fn parses_required_arguments() {
        let matches = command()
            .try_get_matches_from([
                "seed_admin",
                "--email",
                "op@atrium.dev",
                "--password",
                "hunter2hunter2",
            ])
            .expect("arguments should parse");

        assert_eq!(
            matches.get_one::<String>("email").map(String::as_str),
            Some("op@atrium.dev")
        );
        assert_eq!(
            matches.get_one::<String>("format").map(String::as_str),
            Some("json")
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let result = command().try_get_matches_from([
            "seed_admin",
            "--email",
            "op@atrium.dev",
            "--password",
            "hunter2hunter2",
            "--format",
            "yaml",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn email_falls_back_to_environment() {
        // clap resolves env fallbacks at parse time, so a missing flag with
        // no variable set is an error.
        let result =
            command().try_get_matches_from(["seed_admin", "--password", "hunter2hunter2"]);

        if std::env::var("SEED_ADMIN_EMAIL").is_err() {
            assert!(result.is_err());
        }
    }
}
