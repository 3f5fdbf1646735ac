use serde::{Deserialize, Serialize};

/// An opaque RGB colour, serialized as `[r, g, b]`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const HOT_PINK: Color = Color(255, 105, 180);

    /// CSS functional notation, e.g. `rgb(255, 105, 180)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// An immediate-mode 2D drawing target in pixel space, origin at the top left.
///
/// Every `alpha` is a compositing opacity in `[0, 1]` applied to that call only.
/// Nothing drawn is ever read back.
pub trait Surface {
    type Error;

    fn width(&self) -> f64;

    fn height(&self) -> f64;

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    /// Covers the whole surface at the current size.
    fn fill(&mut self, color: Color, alpha: f64) -> Result<(), Self::Error> {
        let (width, height) = (self.width(), self.height());

        self.fill_rect(0.0, 0.0, width, height, color, alpha)
    }
}
