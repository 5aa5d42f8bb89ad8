// SPDX-License-Identifier: MPL-2.0
use canopy::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
canopy - product color and logo customizer

USAGE:
  canopy [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
                         (overrides CANOPY_CONFIG_DIR)
  --assets-dir <DIR>     Directory holding the <Color>.png product images
  -h, --help             Print this help

Set RUST_LOG (e.g. RUST_LOG=canopy=debug) to adjust logging.
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("canopy=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "canopy exited with an error");
            ExitCode::FAILURE
        }
    }
}
