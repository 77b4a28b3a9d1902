use anyhow::{Context, Result};
use nodegen::{
    args::Options, banner, config::Settings, error, runner::SystemRunner,
    validate::InquirePrompter, Error,
};
use std::process::ExitCode;

fn app() -> Result<ExitCode> {
    banner::welcome();

    let options = match Options::parse_from_args(std::env::args_os()) {
        Ok(options) => options,
        Err(Error::Parse(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let root = std::env::current_dir().context("Failed to get current dir")?;

    match nodegen::generate(
        options,
        &root,
        &mut InquirePrompter,
        SystemRunner,
        Settings::from_env(),
    ) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    match app() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
