// SPDX-License-Identifier: MPL-2.0
use catalog_lens::app::{self, Flags};
use env_logger::{Builder, Env};

const HELP: &str = "\
catalog_lens - browse catalog assets page by page

USAGE:
  catalog_lens [OPTIONS]

OPTIONS:
  --lang <id>           Interface language (e.g. en-US, fr)
  --i18n-dir <dir>      Directory with additional .ftl translations
  --config-dir <dir>    Directory holding settings.toml
  --catalog <file>      TOML catalog to browse instead of the bundled sample
  -h, --help            Print this help
";

/// Parses the command line. `None` means help was requested.
fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog_path: args.opt_value_from_str("--catalog")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("iced_wgpu", log::LevelFilter::Warn)
        .filter_module("iced_winit", log::LevelFilter::Warn)
        .init();

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

    app::run(flags)
}
