/// CLI configuration loading
use anyhow::Context;
use std::path::{Path, PathBuf};
use vqa_engine::EngineConfig;

/// Read when no `--config` is given and the file exists
pub const DEFAULT_CONFIG_FILE: &str = "vqa.toml";

/// Environment variable prefix, e.g. `VQA_DEFAULT_SAMPLE_RATE=8000`
pub const ENV_PREFIX: &str = "VQA";

/// Load engine configuration from file and environment
///
/// An explicit `path` must exist; otherwise `vqa.toml` in the working
/// directory is used if present. `VQA_*` variables override file values.
pub fn load(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let mut settings = config::Config::builder();

    match path {
        Some(path) => {
            settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                settings = settings.add_source(config::File::from(default_path));
            }
        }
    }

    // Field names contain underscores, so nesting uses a double underscore
    settings = settings.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config: EngineConfig = settings
        .build()
        .context("failed to read configuration")?
        .try_deserialize()
        .context("invalid configuration")?;

    config.validate()?;
    Ok(config)
}
