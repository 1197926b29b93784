// Core types shared by the rasterizer, the stroke interpolator and the window.

/// A pixel value as minifb expects it: 0x00RRGGBB.
pub type Color = u32;

/// Row-major pixel buffer. Used both for the persistent canvas and for the
/// per-frame screen image pushed to the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the buffer is (pixels)
    pub height: usize,     // how tall the buffer is (pixels)
    pub pixels: Vec<u32>,  // length = width * height
}

impl FrameBuffer {
    /// A buffer of the given size with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    /// Row-major index of (x, y), or None when the position is outside the buffer.
    #[inline]
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u64, y as u64);
        if x >= self.width as u64 || y >= self.height as u64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        self.index_of(x, y).map(|idx| self.pixels[idx])
    }

    /// Write one pixel. Returns false (and writes nothing) outside the buffer.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Color) {
        for p in &mut self.pixels { *p = color; }
    }

    /// Copy every pixel of `src` into self. Both buffers must share a size.
    pub fn copy_from(&mut self, src: &FrameBuffer) {
        debug_assert_eq!((self.width, self.height), (src.width, src.height));
        self.pixels.copy_from_slice(&src.pixels);
    }
}

/// A disc to rasterize: center in buffer pixel coordinates plus radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, r: i32) -> Self {
        Self { x, y, r }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_refuses_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 3, 0);
        assert!(!fb.set(-1, 0, 7));
        assert!(!fb.set(0, -1, 7));
        assert!(!fb.set(4, 0, 7));
        assert!(!fb.set(0, 3, 7));
        assert!(fb.pixels.iter().all(|&p| p == 0));

        assert!(fb.set(3, 2, 7));
        assert_eq!(fb.pixels[2 * 4 + 3], 7);
        assert_eq!(fb.get(3, 2), Some(7));
        assert_eq!(fb.get(3, 3), None);
    }

    #[test]
    fn copy_from_replaces_every_pixel() {
        let mut src = FrameBuffer::new(3, 2, 5);
        src.set(2, 1, 9);
        let mut dst = FrameBuffer::new(3, 2, 0);
        dst.copy_from(&src);
        assert_eq!(dst, src);
    }
}
