// SPDX-License-Identifier: MPL-2.0
use iced_slider::app::{self, paths, Flags};
use iced_slider::ui::theming::ThemeMode;

const HELP: &str = "\
Iced Slider - a swipeable image carousel

USAGE:
  iced_slider [OPTIONS]

OPTIONS:
  --config-dir <DIR>              Directory holding settings.toml
  --theme <light|dark|system>     Override the configured theme
  -h, --help                      Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
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

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
