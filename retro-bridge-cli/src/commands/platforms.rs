use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_bridge_lib::Config;

pub(crate) fn run_platforms(config: &Config) {
    let table = config.platform_table();
    log::info!("Supported AEL platforms ({}):", table.len());
    log::info!("");

    for (source, mapping) in table.iter() {
        log::info!(
            "  {} -> {} [{}]",
            source.if_supports_color(Stdout, |t| t.bold()),
            mapping.id.if_supports_color(Stdout, |t| t.cyan()),
            mapping.name,
        );
        log::info!("    Core: {}", mapping.core);
    }

    if config.arcade.enabled {
        log::info!("");
        log::info!(
            "  {} -> {} [MAME]",
            "AML favourites".if_supports_color(Stdout, |t| t.bold()),
            config
                .arcade
                .platform_id
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}
