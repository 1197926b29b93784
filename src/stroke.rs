// Turns two pointer samples into a trail of circle centers so fast mouse
// moves still leave an unbroken stroke instead of isolated dabs.
use std::iter::FusedIterator;

use crate::raster::fill_circle;
use crate::types::{Circle, Color, FrameBuffer};

/// Centers spaced one step apart on the segment (start, end], at most
/// max(|dx|, |dy|) of them. A zero-length segment still yields `end` once.
#[derive(Clone, Debug)]
pub struct StrokePoints {
    origin: (i64, i64),
    delta: (i64, i64),
    steps: i64,
    next: i64,
}

impl StrokePoints {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        let (x0, y0) = (start.0 as i64, start.1 as i64);
        let dx = end.0 as i64 - x0;
        let dy = end.1 as i64 - y0;
        let steps = dx.abs().max(dy.abs()).max(1);
        Self { origin: (x0, y0), delta: (dx, dy), steps, next: 1 }
    }
}

impl Iterator for StrokePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }
        let i = self.next;
        self.next += 1;
        // delta * i reaches ~2^64 on a full-range segment, so the product is taken in i128.
        // `/` truncates toward zero, same as the integer division the stroke is defined with.
        let along = |origin: i64, delta: i64| -> i32 {
            (origin as i128 + delta as i128 * i as i128 / self.steps as i128) as i32
        };
        Some((along(self.origin.0, self.delta.0), along(self.origin.1, self.delta.1)))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = i64::try_from(n).unwrap_or(i64::MAX);
        self.next = self.next.saturating_add(skip).min(self.steps + 1);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps - self.next + 1).max(0) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StrokePoints {}
impl FusedIterator for StrokePoints {}

/// Stamp a circle of radius `r` at every point between `start` and `end`.
/// Returns how many circles were drawn.
pub fn paint_stroke(
    fb: &mut FrameBuffer,
    start: (i32, i32),
    end: (i32, i32),
    r: i32,
    color: Color,
) -> usize {
    let mut drawn = 0;
    for (x, y) in StrokePoints::new(start, end) {
        fill_circle(fb, Circle::new(x, y, r), color);
        drawn += 1;
    }
    drawn
}
