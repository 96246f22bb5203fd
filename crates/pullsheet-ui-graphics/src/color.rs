//! Color representation and ARGB blending

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_rgba_u8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Packs the colour as `0xAARRGGBB`, rounding each channel.
    pub fn to_argb(&self) -> u32 {
        fn channel(value: f32) -> u32 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u32
        }
        (channel(self.3) << 24) | (channel(self.0) << 16) | (channel(self.1) << 8) | channel(self.2)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Blends every channel (alpha included) linearly from `start` to `end`.
    ///
    /// `fraction` is not clamped; callers pass values in `[0, 1]`.
    pub fn lerp(start: Color, end: Color, fraction: f32) -> Color {
        Color(
            start.0 + (end.0 - start.0) * fraction,
            start.1 + (end.1 - start.1) * fraction,
            start.2 + (end.2 - start.2) * fraction,
            start.3 + (end.3 - start.3) * fraction,
        )
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
