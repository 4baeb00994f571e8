// SPDX-License-Identifier: MPL-2.0
use brainstash::app::{self, config::DEFAULT_LOG_FILTER, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
brainstash

USAGE:
  brainstash [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --backend-url <URL>    Backend root, overrides the configured one
  --token <TOKEN>        Access token, overrides BRAINSTASH_TOKEN
  -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        backend_url: opt_string(&mut args, "--backend-url"),
        token: opt_string(&mut args, "--token"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, key, "ignoring invalid argument");
        None
    })
}
