//! Poltergeist command-line client
//!
//! Sends a single command to a running Poltergeist control process and prints the response.

use anyhow::Context;
use clap::Parser;
use poltergeist_client::{BrowserClient, ClientOptions, CommandOutcome};
use serde_json::Value;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "poltergeist")]
#[command(version)]
#[command(about = "Send a command to a Poltergeist control process", long_about = None)]
struct Cli {
    /// Base URL of the control endpoint
    #[arg(long, default_value = poltergeist_client::browser::DEFAULT_HOST)]
    host: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Maximum attempts per command
    #[arg(long, default_value = "3")]
    max_attempts: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value = "2")]
    wait: u64,

    /// Command name (e.g. visit, title, click)
    name: String,

    /// Command arguments; each is parsed as JSON, or sent as a string otherwise
    args: Vec<String>,
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = ClientOptions::new()
        .host(cli.host)
        .timeout(Duration::from_secs(cli.timeout))
        .max_attempts(cli.max_attempts)
        .wait(Duration::from_secs(cli.wait));

    let client = BrowserClient::new(options).context("Failed to create client")?;
    let args: Vec<Value> = cli.args.iter().map(|raw| parse_arg(raw)).collect();

    match client.command(&cli.name, &args).with_context(|| format!("Command '{}' failed", cli.name))? {
        CommandOutcome::Completed(value) => {
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()));
        }
        CommandOutcome::Interrupted => {
            eprintln!("Command '{}' was interrupted: the page was reloaded after an obsolete node", cli.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_arg_json_and_fallback() {
        assert_eq!(parse_arg("42"), json!(42));
        assert_eq!(parse_arg(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(parse_arg("\"quoted\""), json!("quoted"));
        assert_eq!(parse_arg("https://example.com"), json!("https://example.com"));
    }

    #[test]
    fn test_cli_parses_command_and_args() {
        let cli = Cli::parse_from(["poltergeist", "--max-attempts", "5", "find", "css", "a.link"]);

        assert_eq!(cli.host, "http://127.0.0.1:8510");
        assert_eq!(cli.max_attempts, 5);
        assert_eq!(cli.name, "find");
        assert_eq!(cli.args, vec!["css", "a.link"]);
    }
}
