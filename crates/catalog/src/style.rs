use std::fmt;

/// 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);

    pub const fn rgb(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    /// Normalized channels multiplied by `factor` (clamped to `[0, 1]`).
    pub fn scaled(self, factor: f32) -> [f32; 3] {
        self.rgb()
            .map(|c| (c as f32 / 255.0 * factor).clamp(0.0, 1.0))
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

/// How one item is drawn: marker color, marker radius (pixels on the map) and
/// the style class the list entry carries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisualStyle {
    pub color: Color,
    pub radius: f64,
    pub style_class: &'static str,
}

impl VisualStyle {
    pub const fn new(color: u32, radius: f64, style_class: &'static str) -> Self {
        Self {
            color: Color(color),
            radius,
            style_class,
        }
    }
}
