use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{LoopreelError, LoopreelResult};

/// Straight-alpha RGBA8 color, the paint of every draw operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }

    /// CSS-style `rgba(r, g, b, a)` with `a` in `0..=1`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: unit_to_u8(a),
        }
    }

    /// CSS-style `hsl(h, s%, l%)` with `s` and `l` in `0..=1`.
    pub fn hsl(h_deg: f64, s: f64, l: f64) -> Self {
        let h = (h_deg % 360.0 + 360.0) % 360.0 / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            let v = unit_to_u8(l);
            return Self {
                r: v,
                g: v,
                b: v,
                a: 255,
            };
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        Self {
            r: unit_to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: unit_to_u8(hue_to_rgb(p, q, h)),
            b: unit_to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
            a: 255,
        }
    }

    /// Replace alpha with `a` in `0..=1`.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self {
            a: unit_to_u8(a),
            ..self
        }
    }

    /// Replace alpha with a raw byte, like the `#rrggbbaa` suffixes used for tints.
    pub const fn with_alpha_u8(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiply alpha by `opacity` in `0..=1` (group opacity).
    pub fn fade(self, opacity: f64) -> Self {
        let a = f64::from(self.a) * opacity.clamp(0.0, 1.0);
        Self {
            a: a.round().clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> LoopreelResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> LoopreelResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| LoopreelError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(LoopreelError::validation("hex color must be ascii"));
        }
        match s.len() {
            6 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: 255,
            }),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(LoopreelError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }
}

const fn unit_to_u8(x: f64) -> u8 {
    let x = if x.is_nan() {
        0.0
    } else if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    };
    (x * 255.0 + 0.5) as u8
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/color.rs"]
mod tests;
