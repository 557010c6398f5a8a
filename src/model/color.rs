//! RGB color value

/// An RGB color with floating-point channels
///
/// Channels are stored as imported and are not clamped; values outside
/// `[0, 1]` are left for the renderer to deal with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub red: f32,
    /// Green channel
    pub green: f32,
    /// Blue channel
    pub blue: f32,
}

impl Color {
    /// Black, the default color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new color from its three channels
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

impl From<[f32; 3]> for Color {
    fn from([red, green, blue]: [f32; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}
