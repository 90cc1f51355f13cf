// SPDX-License-Identifier: MPL-2.0
//! Launcher for the pattern viewer application.

use vitrine::app::{patterns, Flags};
use vitrine::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };
    let _ = args.finish();

    config::paths::init_cli_overrides(flags.config_dir.clone());

    patterns::run(flags)
}
