use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    courseforge::logging::init().context("init logging")?;

    let cli = courseforge::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        courseforge::cli::Command::Form(args) => {
            courseforge::form::run(args).await.context("form")?;
        }
        courseforge::cli::Command::Submit(args) => {
            courseforge::submit::run(args).await.context("submit")?;
        }
    }

    Ok(())
}
