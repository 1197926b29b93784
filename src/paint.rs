// The interaction state machine: input events in, canvas mutations out.
// Visual: press LMB to start a stroke, drag to paint, RMB cycles color,
// wheel resizes the brush, C wipes the sheet, ESC quits.

use tracing::{debug, info};

use crate::config::{MIN_BRUSH_RADIUS, PaintConfig};
use crate::palette::Swatch;
use crate::raster::{fill_circle, fill_circle_outline};
use crate::stroke::paint_stroke;
use crate::types::{Circle, Color, FrameBuffer};

/// One input, already translated from whatever the window reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    PrimaryDown { x: i32, y: i32 },
    PrimaryUp,
    SecondaryDown,
    /// Wheel delta; only the sign matters.
    Scroll(f32),
    ClearCanvas,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A stroke is active; `anchor` is where the last interpolation ended.
    Painting { anchor: (i32, i32) },
    Exited,
}

/// Everything the loop carries between events. Passed in and handed back
/// by `handle_event`, never shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintState {
    pub phase: Phase,
    pub brush: (i32, i32),
    pub radius: i32,
    pub max_radius: i32,
    pub swatch: Swatch,
    pub background: Color,
}

impl PaintState {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            phase: Phase::Idle,
            brush: (
                i32::try_from(config.width / 2).unwrap_or(i32::MAX),
                i32::try_from(config.height / 2).unwrap_or(i32::MAX),
            ),
            radius: config.clamped_initial_radius(),
            max_radius: config.max_radius(),
            swatch: config.initial_swatch,
            background: config.background,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Exited
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.phase, Phase::Painting { .. })
    }

    pub fn color(&self) -> Color {
        self.swatch.color()
    }

    pub fn brush_circle(&self) -> Circle {
        Circle::new(self.brush.0, self.brush.1, self.radius)
    }
}

/// Apply one event. Only the canvas passed here is ever painted on.
pub fn handle_event(mut state: PaintState, event: InputEvent, canvas: &mut FrameBuffer) -> PaintState {
    if state.phase == Phase::Exited {
        return state;
    }

    match event {
        InputEvent::PrimaryDown { x, y } => {
            state.brush = (x, y);
            fill_circle(canvas, state.brush_circle(), state.color());
            state.phase = Phase::Painting { anchor: (x, y) };
            debug!(x, y, radius = state.radius, swatch = ?state.swatch, "stroke started");
        }
        InputEvent::PointerMoved { x, y } => {
            state.brush = (x, y);
            if let Phase::Painting { anchor } = state.phase {
                paint_stroke(canvas, anchor, (x, y), state.radius, state.color());
                state.phase = Phase::Painting { anchor: (x, y) };
            }
        }
        InputEvent::PrimaryUp => {
            if state.is_painting() {
                state.phase = Phase::Idle;
                debug!("stroke ended");
            }
        }
        InputEvent::SecondaryDown => {
            state.swatch = state.swatch.next();
            debug!(swatch = ?state.swatch, "color changed");
        }
        InputEvent::Scroll(delta) => {
            let step = if delta > 0.0 { 1 } else if delta < 0.0 { -1 } else { 0 };
            if step != 0 {
                state.radius = (state.radius + step).clamp(MIN_BRUSH_RADIUS, state.max_radius);
                debug!(radius = state.radius, "brush resized");
            }
        }
        InputEvent::ClearCanvas => {
            canvas.fill(state.background);
            debug!("canvas cleared");
        }
        InputEvent::Quit => {
            state.phase = Phase::Exited;
            info!("quit requested");
        }
    }

    state
}

/// Fold a frame's worth of events through `handle_event`.
pub fn handle_events<I>(state: PaintState, events: I, canvas: &mut FrameBuffer) -> PaintState
where
    I: IntoIterator<Item = InputEvent>,
{
    events.into_iter().fold(state, |s, e| handle_event(s, e, canvas))
}

/// Build the image to show: the canvas, then the brush preview on top.
/// `outline` draws a 1-pixel ring just outside the brush so it stays visible over
/// paint of its own color; the brush disc itself always shows the active color.
pub fn compose_frame(canvas: &FrameBuffer, screen: &mut FrameBuffer, state: &PaintState, outline: Option<Color>) {
    screen.copy_from(canvas);
    let brush = state.brush_circle();
    if let Some(ring) = outline {
        let halo = Circle::new(brush.x, brush.y, brush.r.saturating_add(1));
        fill_circle_outline(screen, halo, 1, ring);
    }
    fill_circle(screen, brush, state.color());
}
