//! Config command implementation

use super::AppContext;
use crate::config_loader::CONFIG_FILE_NAME;
use crate::output::OutputWriter;
use crate::output_types::{ConfigOutput, ConfigValue};
use anyhow::Result;
use shiftcal_core::config::ConfigSource;

pub fn execute(output: &OutputWriter, ctx: &AppContext) -> Result<()> {
    let map = ctx.config.to_inspection_map();
    let entry = |key: &str| -> (String, ConfigSource) {
        map.get(key)
            .cloned()
            .unwrap_or_else(|| (String::new(), ConfigSource::Default))
    };

    let config_file = ctx.home.join(CONFIG_FILE_NAME);

    if output.is_json() {
        let value = |key: &str| {
            let (value, source) = entry(key);
            ConfigValue {
                value,
                source: format!("{:?}", source),
            }
        };

        return output.result(ConfigOutput {
            home: ctx.home.display().to_string(),
            settings_file: ctx.storage.settings_path().display().to_string(),
            config_file: config_file.display().to_string(),
            locale: value("locale"),
            subject: value("subject"),
            week_start: value("week_start"),
        });
    }

    output.section("Paths");
    output.kv("Home", ctx.home.display());
    output.kv("Settings", ctx.storage.settings_path().display());
    output.kv(
        "Config",
        format!(
            "{}{}",
            config_file.display(),
            if config_file.exists() { "" } else { " (not present)" }
        ),
    );

    output.section("Configuration");
    for key in ["locale", "subject", "week_start"] {
        let (value, source) = entry(key);
        output.kv(key, format!("{} ({:?})", value, source));
    }

    Ok(())
}
