// SPDX-License-Identifier: MPL-2.0
use dig_deep_coach::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_base: args.opt_value_from_str("--api-base").unwrap(),
        token: args.opt_value_from_str("--token").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
