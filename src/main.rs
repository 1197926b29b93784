// What you SEE:
// • A white sheet with a round brush following the cursor (OS cursor hidden).
// • Hold Left Mouse: paint. Fast drags still leave a solid stroke.
// • Right click: next color (black → red → green → blue → black).
// • Mouse wheel: brush radius ±1 (never below 1).
// • C clears the sheet. ESC or closing the window quits.

use circle_paint::config::PaintConfig;
use circle_paint::draw::Drawer;
use circle_paint::error::Error;
use circle_paint::logging;
use circle_paint::paint::{PaintState, compose_frame, handle_events};
use circle_paint::types::FrameBuffer;
use tracing::info;

fn main() -> Result<(), Error> {
    logging::init();
    let config = PaintConfig::default();

    /* --- Window setup ---
       Visual: window opens centered on the default display. */
    let mut drawer = Drawer::new(&config.title, config.width, config.height, config.target_fps)?;
    info!(width = config.width, height = config.height, "window opened");

    /* --- Buffers ---
       `canvas` is the persistent painting; `screen` is canvas + brush preview, rebuilt each frame. */
    let mut canvas = FrameBuffer::new(config.width, config.height, config.background);
    let mut screen = canvas.clone();

    let mut state = PaintState::new(&config);

    /* ------------------------------ Main loop ------------------------------ */
    while state.is_running() {
        let events = drawer.poll_events();
        state = handle_events(state, events, &mut canvas);
        if !state.is_running() {
            break;
        }

        compose_frame(&canvas, &mut screen, &state, config.preview_outline);
        drawer.present(&screen)?;
    }

    info!("bye");
    Ok(())
}
