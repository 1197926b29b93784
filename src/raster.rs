// Circle rasterization onto a FrameBuffer.
// Visual: solid round dabs (the paint) and thin rings (the brush preview).
use crate::types::{Circle, Color, FrameBuffer};

/// Bounding box of `circle` clipped to the buffer, as inclusive (x0, y0, x1, y1).
/// None when the box misses the buffer entirely or the radius is negative.
fn clipped_bounds(fb: &FrameBuffer, circle: Circle) -> Option<(i64, i64, i64, i64)> {
    if circle.r < 0 || fb.width == 0 || fb.height == 0 {
        return None;
    }
    let (cx, cy, r) = (circle.x as i64, circle.y as i64, circle.r as i64);
    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r).min(fb.width as i64 - 1);
    let y1 = (cy + r).min(fb.height as i64 - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

/// Scan the clipped bounding box and set every pixel whose squared distance
/// from the center satisfies `keep`.
fn scan_disc(fb: &mut FrameBuffer, circle: Circle, color: Color, keep: impl Fn(i64) -> bool) {
    let Some((x0, y0, x1, y1)) = clipped_bounds(fb, circle) else { return };
    let (cx, cy) = (circle.x as i64, circle.y as i64);

    for y in y0..=y1 {
        let dy = y - cy;
        for x in x0..=x1 {
            let dx = x - cx;
            if keep((dx * dx).saturating_add(dy * dy)) {
                fb.set(x, y, color);
            }
        }
    }
}

/// Fill every pixel within distance `r` of the center (d² ≤ r²), clipped to the buffer.
/// Radius 0 paints the center pixel only; a negative radius paints nothing.
pub fn fill_circle(fb: &mut FrameBuffer, circle: Circle, color: Color) {
    let r = circle.r as i64;
    let r2 = r * r;
    scan_disc(fb, circle, color, |d2| d2 <= r2);
}

/// Paint a ring `border` pixels thick just inside the circle's edge
/// (r_inner² ≤ d² ≤ r², r_inner = r - border). A border of 0 keeps only the
/// lattice points exactly on the edge; a border wider than the radius squares
/// to something past r² and draws nothing.
pub fn fill_circle_outline(fb: &mut FrameBuffer, circle: Circle, border: i32, color: Color) {
    let r = circle.r as i64;
    let outer2 = r * r;
    let inner = r - border as i64;
    let inner2 = inner.saturating_mul(inner);
    scan_disc(fb, circle, color, |d2| d2 <= outer2 && d2 >= inner2);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(fb: &FrameBuffer, color: Color) -> usize {
        fb.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn radius_zero_is_single_pixel() {
        let mut fb = FrameBuffer::new(9, 9, 0);
        fill_circle(&mut fb, Circle::new(4, 4, 0), 1);
        assert_eq!(painted(&fb, 1), 1);
        assert_eq!(fb.get(4, 4), Some(1));
    }

    #[test]
    fn negative_radius_is_noop() {
        let mut fb = FrameBuffer::new(9, 9, 0);
        fill_circle(&mut fb, Circle::new(4, 4, -3), 1);
        assert_eq!(painted(&fb, 1), 0);
    }

    #[test]
    fn radius_one_is_a_plus() {
        let mut fb = FrameBuffer::new(5, 5, 0);
        fill_circle(&mut fb, Circle::new(2, 2, 1), 1);
        assert_eq!(painted(&fb, 1), 5);
        for (x, y) in [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)] {
            assert_eq!(fb.get(x, y), Some(1), "({x},{y})");
        }
        assert_eq!(fb.get(1, 1), Some(0));
    }

    #[test]
    fn clipped_at_corner() {
        let mut fb = FrameBuffer::new(10, 10, 0);
        fill_circle(&mut fb, Circle::new(0, 0, 2), 1);
        // Quarter disc of radius 2 including the axes: (0,0),(1,0),(2,0),(0,1),(1,1),(0,2)
        assert_eq!(painted(&fb, 1), 6);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let mut fb = FrameBuffer::new(4, 4, 0);
        fill_circle(&mut fb, Circle::new(i32::MAX, i32::MIN, i32::MAX), 1);
        fill_circle(&mut fb, Circle::new(i32::MIN, i32::MIN, 3), 1);
        assert_eq!(painted(&fb, 1), 0);
    }

    #[test]
    fn outline_keeps_only_the_ring() {
        let mut fb = FrameBuffer::new(21, 21, 0);
        fill_circle_outline(&mut fb, Circle::new(10, 10, 8), 1, 1);
        assert_eq!(fb.get(10, 10), Some(0));
        assert_eq!(fb.get(18, 10), Some(1));
        assert_eq!(fb.get(10, 2), Some(1));
        assert_eq!(fb.get(16, 10), Some(0));
    }

    #[test]
    fn outline_wider_than_radius_draws_nothing() {
        let mut fb = FrameBuffer::new(11, 11, 0);
        fill_circle_outline(&mut fb, Circle::new(5, 5, 3), 10, 1);
        assert_eq!(painted(&fb, 1), 0);
    }

    #[test]
    fn outline_with_zero_border_keeps_exact_edge() {
        let mut fb = FrameBuffer::new(11, 11, 0);
        fill_circle_outline(&mut fb, Circle::new(5, 5, 5), 0, 1);
        // d² = 25: (±5,0), (0,±5), (±3,±4), (±4,±3)
        assert_eq!(painted(&fb, 1), 12);
        assert_eq!(fb.get(10, 5), Some(1));
        assert_eq!(fb.get(8, 9), Some(1));
        assert_eq!(fb.get(5, 5), Some(0));
    }

    #[test]
    fn outline_border_equal_to_radius_fills_disc() {
        let mut ring = FrameBuffer::new(11, 11, 0);
        let mut disc = FrameBuffer::new(11, 11, 0);
        fill_circle_outline(&mut ring, Circle::new(5, 5, 3), 3, 1);
        fill_circle(&mut disc, Circle::new(5, 5, 3), 1);
        assert_eq!(ring, disc);
    }
}
