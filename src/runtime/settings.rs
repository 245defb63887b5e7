use log::warn;
use stemdb::config;
use stemdb::error::DbResult;

/// Load settings, falling back to defaults when the config cannot be read.
/// Settings that load but do not validate are an error.
pub fn load_settings() -> DbResult<config::Settings> {
    let settings = match config::Settings::load() {
        Ok(s) => s,
        Err(e) => {
            // Config is optional; failures should not prevent indexing.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };
    settings.validate()?;
    Ok(settings)
}
