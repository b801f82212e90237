// SPDX-License-Identifier: MPL-2.0
use libris::app::{self, Flags};
use libris::domain::flash::FlashMessage;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Live book search

USAGE:
  libris [OPTIONS]

OPTIONS:
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --endpoint <URL>         Lookup service base URL (empty disables search)
  --flash <CATEGORY:TEXT>  Show a status toast on startup (repeatable)
  -h, --help               Print this help

KEYS:
  Ctrl+Shift+D             Save diagnostics.json next to settings.toml
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        flashes: args.values_from_str::<_, FlashMessage>("--flash")?,
    };

    let remaining: Vec<OsString> = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libris=info")),
        )
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        lang = ?flags.lang,
        endpoint = ?flags.endpoint,
        flashes = flags.flashes.len(),
        "starting libris"
    );
    app::run(flags)
}
