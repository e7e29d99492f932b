// SPDX-License-Identifier: MPL-2.0
use render_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
render_folio - interior-design portfolio viewer

USAGE:
  render_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. es, en-US)
  --config-dir <DIR>    Directory holding settings.toml
  --no-animations       Show every section without reveal transitions
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("render_folio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir");
        None
    });
    let no_animations = args.contains("--no-animations");

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir,
        no_animations,
    })
}
