//! RGB color model for the persisted grid colors.

use serde::{Deserialize, Serialize};

/// An opaque color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_json_shape() {
        let json = serde_json::to_string(&Color::new(220, 220, 240)).unwrap();
        assert_eq!(json, r#"{"r":220,"g":220,"b":240}"#);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::new(250, 250, 255).to_string(), "(250, 250, 255)");
    }
}
