use std::process::ExitCode;

use api_key_tool::cli::{Args, run};
use api_key_tool::settings::Settings;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = Settings::load(&args.conf);

    // RUST_LOG wins; otherwise the settings file level, otherwise info.
    let level = settings
        .as_ref()
        .ok()
        .and_then(|s| s.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut stdout = std::io::stdout().lock();
    match settings.and_then(|settings| run(&args, &settings, &mut stdout)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
