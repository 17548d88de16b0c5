// SPDX-License-Identifier: MPL-2.0
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use shot_lens::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: shot_lens [OPTIONS] [DIRECTORY]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let directory = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        config_dir,
        directory,
    }))
}

const LOG_SPEC: &str = "info, iced=error, wgpu_hal=error, wgpu_core=error";

fn start_logger() -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str(LOG_SPEC) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log specification: {err}");
            return None;
        }
    };

    let logger = match paths::get_app_config_dir() {
        Some(dir) if std::fs::create_dir_all(&dir).is_ok() => logger
            .log_to_file(
                FileSpec::default()
                    .directory(&dir)
                    .basename("shot_lens")
                    .suffix("log")
                    .suppress_timestamp(),
            )
            .rotate(
                Criterion::Size(64 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn),
        _ => logger.log_to_stderr(),
    };

    match logger.start() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    // Flushes the log file when dropped at exit.
    let _logger = start_logger();
    log::info!("Starting ShotLens {}", env!("CARGO_PKG_VERSION"));

    app::run(flags)
}
