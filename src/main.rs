// SPDX-License-Identifier: MPL-2.0
use ckd_lens::app::{self, paths, Flags};
use ckd_lens::domain::language::Language;
use ckd_lens::logging;

const HELP: &str = "\
CKD Lens - chronic kidney disease risk screening client

USAGE:
  ckd_lens [OPTIONS]

OPTIONS:
  -h, --help            Print this help
  --lang CODE           Interface language: en, kn or hi
  --server URL          Prediction service base URL
  --config-dir DIR      Directory holding settings.toml
  --data-dir DIR        Directory holding state.cbor

ENVIRONMENT:
  CKD_LENS_SERVER_URL   Prediction service base URL
  CKD_LENS_CONFIG_DIR   Config directory
  CKD_LENS_DATA_DIR     Data directory
  CKD_LENS_LOG          Log filter (e.g. debug, ckd_lens=trace)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    if let Some(code) = flags.lang.as_deref() {
        if code.parse::<Language>().is_err() {
            tracing::warn!(code, "unsupported --lang value ignored");
        }
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        server: args.opt_value_from_str("--server")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(flags)
}
