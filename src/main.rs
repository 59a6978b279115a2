// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, paths, Flags};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "\
Usage: iced_reel [OPTIONS] [VIDEO]

Options:
  --config-dir DIR   Directory holding settings.toml
  --library DIR      Root directory of the video library
  -h, --help         Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "iced_reel=info".into()))
        .with(fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|e| {
        tracing::warn!("ignoring --config-dir: {e}");
        None
    });
    let library_dir: Option<String> = args.opt_value_from_str("--library").unwrap_or_else(|e| {
        tracing::warn!("ignoring --library: {e}");
        None
    });
    paths::init_cli_overrides(config_dir, library_dir);

    let flags = Flags {
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
