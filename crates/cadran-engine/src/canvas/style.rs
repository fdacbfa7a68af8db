use std::fmt;

/// Shape used at the open ends of stroked segments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Horizontal anchoring of `fill_text` relative to its x coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Offset to add to the anchor x for text of the given advance width.
    #[inline]
    pub fn offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }
}

/// Font selection: pixel size plus family name.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Size in logical pixels.
    pub size: f32,
    pub family: String,
}

impl Font {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self { size, family: family.into() }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

/// Canvas shorthand, e.g. `30px Arial`.
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_shorthand() {
        assert_eq!(Font::new(30.0, "Arial").to_string(), "30px Arial");
        assert_eq!(Font::new(22.5, "Times New Roman").to_string(), "22.5px Times New Roman");
    }

    #[test]
    fn align_offsets() {
        assert_eq!(TextAlign::Left.offset(40.0), 0.0);
        assert_eq!(TextAlign::Center.offset(40.0), -20.0);
        assert_eq!(TextAlign::Right.offset(40.0), -40.0);
    }
}
