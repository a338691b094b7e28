use break_overlay::gui::{native_options, BreakApp, WINDOW_TITLE};
use break_overlay::logging;
use break_overlay::media::MediaSession;
use break_overlay::settings::{Settings, SETTINGS_FILE};

use anyhow::Context;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)
        .with_context(|| format!("failed to read {SETTINGS_FILE}"))?;
    logging::init(settings.debug_logging, settings.log_path());

    let mut media = settings.pause_media.then(MediaSession::pause_playing);

    let app_settings = settings.clone();
    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |_cc| Box::new(BreakApp::new(&app_settings, Instant::now()))),
    );

    if let Some(session) = media.as_mut() {
        session.resume();
    }
    result.map_err(|e| anyhow::anyhow!("failed to open break overlay: {e}"))?;
    tracing::info!("break over");
    Ok(())
}
