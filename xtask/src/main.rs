//! Workspace chores for `TimeSync`: `cargo xtask <command>`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context};

/// Variables the server refuses to start without (unless a config file is found).
const REQUIRED_ENV: [&str; 3] = ["NOTION_API_KEY", "NOTION_DATABASE_ID", "NOTION_SUMMARY_DB_ID"];

const FMT: &[&str] = &["fmt", "--all", "--", "--check"];
const CLIPPY: &[&str] = &["clippy", "--workspace", "--all-targets"];
const BUILD: &[&str] = &["build", "-p", "timesync-api", "--bin", "timesync"];
const TEST: &[&str] = &["test", "--workspace"];

const USAGE: &str = "usage: cargo xtask <ci|fmt|clippy|test|env>

    ci        fmt, clippy, build the server, test
    fmt       check formatting
    clippy    lint every target
    test      run the workspace tests
    env       report missing Notion variables";

fn main() -> ExitCode {
    let result = match env::args().nth(1).as_deref() {
        Some("ci") => [FMT, CLIPPY, BUILD, TEST].into_iter().try_for_each(cargo),
        Some("fmt") => cargo(FMT),
        Some("clippy") => cargo(CLIPPY),
        Some("test") => cargo(TEST),
        Some("env") => check_env(),
        Some("help") | None => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => {
            eprintln!("{USAGE}");
            Err(anyhow::anyhow!("unknown task `{other}`"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("xtask: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cargo(args: &[&str]) -> anyhow::Result<()> {
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status().context("failed to spawn cargo")?;
    if !status.success() {
        bail!("cargo {} failed", args[0]);
    }
    Ok(())
}

fn check_env() -> anyhow::Result<()> {
    let missing: Vec<&str> = REQUIRED_ENV
        .into_iter()
        .filter(|key| env::var(key).map_or(true, |value| value.is_empty()))
        .collect();

    if missing.is_empty() {
        println!("all required variables are set");
        return Ok(());
    }
    bail!("missing {}; set them or provide timesync.toml", missing.join(", "))
}
