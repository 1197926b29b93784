use crate::types::Color;

/// The fixed set of paint colors, in the order the secondary button cycles them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Swatch {
    #[default]
    Black,
    Red,
    Green,
    Blue,
}

impl Swatch {
    pub const ALL: [Swatch; 4] = [Swatch::Black, Swatch::Red, Swatch::Green, Swatch::Blue];

    /// 0x00RRGGBB value written into the canvas.
    pub fn color(self) -> Color {
        match self {
            Swatch::Black => 0x00_00_00_00,
            Swatch::Red => 0x00_FF_00_00,
            Swatch::Green => 0x00_00_FF_00,
            Swatch::Blue => 0x00_00_00_FF,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The following swatch, wrapping from the last back to the first.
    pub fn next(self) -> Swatch {
        Swatch::ALL[(self.index() + 1) % Swatch::ALL.len()]
    }
}
