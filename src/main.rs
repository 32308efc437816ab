// SPDX-License-Identifier: MPL-2.0
use iced_feedback::app::{self, Flags};
use iced_feedback::config::{self, Config};
use iced_feedback::error::{Error, Result};
use iced_feedback::lifecycle::Position;
use iced_feedback::logging;
use std::path::PathBuf;
use tracing::{info, warn};

const HELP: &str = "\
Usage: iced_feedback [OPTIONS]

Options:
  --config-dir <DIR>     Read settings.toml from DIR
  --duration <MS>        Countdown in milliseconds (0 or less dismisses at once)
  --position <ANCHOR>    top-center, top-left, top-right, bottom-center, bottom-left, bottom-right
  --log <FILTER>         Log filter, overrides RUST_LOG
  --write-config         Store the effective notification defaults in settings.toml
  -h, --help             Print this help
";

#[derive(Debug, Default)]
struct Args {
    config_dir: Option<PathBuf>,
    duration_ms: Option<i64>,
    position: Option<Position>,
    log: Option<String>,
    write_config: bool,
}

fn parse_args() -> Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let write_config = pargs.contains("--write-config");
    let args = Args {
        config_dir: pargs.opt_value_from_str("--config-dir")?,
        duration_ms: pargs.opt_value_from_str("--duration")?,
        position: pargs.opt_value_from_str("--position")?,
        log: pargs.opt_value_from_str("--log")?,
        write_config,
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "unexpected arguments: {rest:?}"
        )));
    }

    Ok(Some(args))
}

fn write_config(config: &Config, args: &Args) {
    let mut effective = config.clone();
    effective
        .notification
        .apply_overrides(args.duration_ms, args.position);

    match config::save_with_override(&effective, args.config_dir.clone()) {
        Ok(()) => info!("settings written"),
        Err(err) => warn!(%err, "settings could not be written"),
    }
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (config, config_warning) = config::load_with_override(args.config_dir.clone());

    if let Err(err) = logging::init(args.log.as_deref(), Some(&config.logging.filter)) {
        eprintln!("{err}");
    }

    if args.write_config {
        write_config(&config, &args);
    }

    app::run(Flags {
        config,
        config_warning,
        duration_ms: args.duration_ms,
        position: args.position,
    })
}
