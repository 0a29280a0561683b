use anyhow::Result;

use shopfront::app::App;
use shopfront::config::Settings;
use shopfront::logging;

fn main() -> Result<()> {
    // Settings pick the log level, so logging starts after they load.
    let (settings, load_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    logging::init_tracing(&settings.log_level)?;

    if let Some(err) = load_error {
        tracing::warn!("using default settings: {}", err);
    }
    tracing::info!(theme = ?settings.theme, "starting shopfront");

    App::run(settings)
}
