use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let (r, g, b, a) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                255,
            ),
            8 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                u8::from_str_radix(&s[6..8], 16).unwrap_or(255),
            ),
            _ => (0, 0, 0, 255),
        };
        Color(r, g, b, a)
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(self) -> String {
        if self.3 == 255 {
            format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.0,
                self.1,
                self.2,
                self.3 as f32 / 255.0
            )
        }
    }
}

/// Brush for filling shapes.
///
/// This can be a solid color or a gradient. Modifiers talk in terms of
/// `Brush` rather than raw `Color` so that gradients share the same path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    /// Solid color fill
    Solid(Color),

    /// Linear gradient from `start` to `end` in normalized local coordinates
    /// (top-left is (0,0), bottom-right is (1,1)). An optional middle stop
    /// sits halfway.
    Linear {
        start: Vec2,
        end: Vec2,
        start_color: Color,
        mid_color: Option<Color>,
        end_color: Color,
    },
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl Brush {
    pub fn to_css(&self) -> String {
        match self {
            Brush::Solid(c) => c.to_css(),
            Brush::Linear {
                start,
                end,
                start_color,
                mid_color,
                end_color,
            } => {
                let (dx, dy) = (end.x - start.x, end.y - start.y);
                // CSS angles run clockwise from "to top".
                let deg = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
                match mid_color {
                    Some(mid) => format!(
                        "linear-gradient({deg:.0}deg, {}, {}, {})",
                        start_color.to_css(),
                        mid.to_css(),
                        end_color.to_css()
                    ),
                    None => format!(
                        "linear-gradient({deg:.0}deg, {}, {})",
                        start_color.to_css(),
                        end_color.to_css()
                    ),
                }
            }
        }
    }
}

pub struct LinearGradient;

impl LinearGradient {
    pub fn vertical(top: Color, bottom: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 0.0, y: 1.0 },
            start_color: top,
            mid_color: None,
            end_color: bottom,
        }
    }

    /// Top-left to bottom-right through a middle stop.
    pub fn diagonal(from: Color, via: Color, to: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 1.0, y: 1.0 },
            start_color: from,
            mid_color: Some(via),
            end_color: to,
        }
    }
}
