//! Color value type and color model for decoded XWD pixels.

/// One decoded pixel: 8-bit red, green and blue. XWD truecolor dumps
/// carry no alpha — a pixel's fourth byte is padding — so the color is
/// always reported fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Construct a color from 8-bit components.
    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// 16-bit-per-channel RGBA representation: `(r, g, b, alpha)`.
    ///
    /// Each 8-bit channel is widened by replicating it into both bytes
    /// (`c << 8 | c`), a lossless expansion rather than a rescale, and
    /// alpha is always `0xffff`.
    pub fn rgba(&self) -> (u16, u16, u16, u16) {
        let expand = |c: u8| u16::from(c) << 8 | u16::from(c);
        (expand(self.r), expand(self.g), expand(self.b), 0xffff)
    }
}

/// The XWD color model: converts 16-bit-per-channel RGBA values into
/// [`Color`] by dropping the low byte of each channel and discarding
/// alpha.
///
/// Zero-sized and pure — the one value [`ColorModel`] is the process-wide
/// model instance, safe to copy and call from any thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorModel;

impl ColorModel {
    /// Quantize a 16-bit-per-channel RGBA value down to a [`Color`].
    pub fn convert_rgba(&self, r: u16, g: u16, b: u16, _a: u16) -> Color {
        Color {
            r: (r >> 8) as u8,
            g: (g >> 8) as u8,
            b: (b >> 8) as u8,
        }
    }

    /// Identity: a value already in the model needs no conversion.
    pub fn convert(&self, c: Color) -> Color {
        c
    }
}

/// Pixel bounds of a decoded image: the rectangle (0,0)–(width,height).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Whether pixel (x, y) lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
}
