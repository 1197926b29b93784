// Window glue: a minifb window that shows the composed frame and reports
// input as a list of InputEvents per frame.
//
// minifb only exposes *current* state (button held, cursor position), so the
// edges the paint state machine needs (press, release, moved) are derived by
// comparing each frame's snapshot with the previous one.

use crate::error::Error;
use crate::paint::InputEvent;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Raw input state for one frame, as read from the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub open: bool,
    pub escape: bool,                 // pressed this frame
    pub clear: bool,                  // C pressed this frame
    pub mouse: Option<(i32, i32)>,    // cursor in window pixels
    pub left: bool,                   // held
    pub right: bool,                  // held
    pub scroll: Option<f32>,          // vertical wheel delta this frame
}

/// Turns successive snapshots into edge events.
#[derive(Clone, Debug, Default)]
pub struct EventTranslator {
    last_pos: Option<(i32, i32)>,
    left_was: bool,
    right_was: bool,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this frame. Motion is reported before a press so a click
    /// lands where the cursor is now; quit comes last.
    pub fn translate(&mut self, snap: &InputSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some((x, y)) = snap.mouse {
            if self.last_pos != Some((x, y)) {
                events.push(InputEvent::PointerMoved { x, y });
                self.last_pos = Some((x, y));
            }
        }

        if snap.left && !self.left_was {
            // Without a known position there is nowhere to stamp; retry next frame.
            if let Some((x, y)) = self.last_pos {
                events.push(InputEvent::PrimaryDown { x, y });
                self.left_was = true;
            }
        } else if !snap.left && self.left_was {
            events.push(InputEvent::PrimaryUp);
            self.left_was = false;
        }

        if snap.right && !self.right_was {
            events.push(InputEvent::SecondaryDown);
        }
        self.right_was = snap.right;

        if let Some(dy) = snap.scroll {
            if dy != 0.0 {
                events.push(InputEvent::Scroll(dy));
            }
        }

        if snap.clear {
            events.push(InputEvent::ClearCanvas);
        }

        if !snap.open || snap.escape {
            events.push(InputEvent::Quit);
        }

        events
    }
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    translator: EventTranslator,
}

impl Drawer {
    /// Create the window and hide the OS cursor (the brush preview replaces it).
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        window.set_cursor_visibility(false);
        Ok(Self { window, translator: EventTranslator::new() })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Read the window's current input state.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            open: self.window.is_open(),
            escape: self.window.is_key_pressed(Key::Escape, KeyRepeat::No),
            clear: self.window.is_key_pressed(Key::C, KeyRepeat::No),
            // Pass: keep reporting while a drag leaves the window; the rasterizer clips.
            mouse: self
                .window
                .get_mouse_pos(MouseMode::Pass)
                .map(|(x, y)| (x.floor() as i32, y.floor() as i32)),
            left: self.window.get_mouse_down(MouseButton::Left),
            right: self.window.get_mouse_down(MouseButton::Right),
            scroll: self.window.get_scroll_wheel().map(|(_, dy)| dy),
        }
    }

    /// Everything that happened since the previous call.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let snap = self.snapshot();
        self.translator.translate(&snap)
    }
}
