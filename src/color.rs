//! CSS color parsing and luma.
//!
//! Only what the contrast classifier needs: the resolved `background-color`
//! strings browsers hand back (`rgb(..)` / `rgba(..)`), plus short and long
//! hex for hand-written scenes.

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Rec. 601 luma on the 0..=255 scale.
    pub fn luma(self) -> f64 {
        let Rgb(r, g, b) = self;
        0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
    }
}

/// Parse a CSS color string.
///
/// Returns `None` for anything that does not name an opaque-enough color,
/// including fully transparent `rgba(.., 0)` and keywords like `transparent`.
pub fn parse_css_color(raw: &str) -> Option<Rgb> {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    // Accept both legacy commas and the space/slash syntax.
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 3 {
        return None;
    }

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;

    if let Some(alpha) = parts.get(3) {
        if alpha_value(alpha)? <= 0.0 {
            return None;
        }
    }

    Some(Rgb(r, g, b))
}

fn channel(tok: &str) -> Option<u8> {
    let v = if let Some(pct) = tok.strip_suffix('%') {
        pct.parse::<f64>().ok()? * 2.55
    } else {
        tok.parse::<f64>().ok()?
    };
    if !v.is_finite() {
        return None;
    }
    Some(v.round().clamp(0.0, 255.0) as u8)
}

fn alpha_value(tok: &str) -> Option<f64> {
    let v = if let Some(pct) = tok.strip_suffix('%') {
        pct.parse::<f64>().ok()? / 100.0
    } else {
        tok.parse::<f64>().ok()?
    };
    v.is_finite().then_some(v)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 | 4 => {
            let r = nibble(bytes[0])? * 17;
            let g = nibble(bytes[1])? * 17;
            let b = nibble(bytes[2])? * 17;
            if bytes.len() == 4 && nibble(bytes[3])? == 0 {
                return None;
            }
            Some(Rgb(r, g, b))
        }
        6 | 8 => {
            let byte = |i: usize| -> Option<u8> { Some(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?) };
            if bytes.len() == 8 && byte(6)? == 0 {
                return None;
            }
            Some(Rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_computed_style_strings() {
        assert_eq!(parse_css_color("rgb(255, 255, 255)"), Some(Rgb::WHITE));
        assert_eq!(parse_css_color("rgba(159, 18, 57, 0.9)"), Some(Rgb(159, 18, 57)));
        assert_eq!(parse_css_color("rgb(17 24 39)"), Some(Rgb(17, 24, 39)));
        assert_eq!(parse_css_color("rgb(0 0 0 / 50%)"), Some(Rgb::BLACK));
    }

    #[test]
    fn transparent_is_unresolved() {
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0)"), None);
        assert_eq!(parse_css_color("transparent"), None);
        assert_eq!(parse_css_color("#0000"), None);
        assert_eq!(parse_css_color(""), None);
    }

    #[test]
    fn parses_hex() {
        assert_eq!(parse_css_color("#fff"), Some(Rgb::WHITE));
        assert_eq!(parse_css_color("#9F1239"), Some(Rgb(0x9f, 0x12, 0x39)));
        assert_eq!(parse_css_color("#12"), None);
        assert_eq!(parse_css_color("#zzzzzz"), None);
    }

    #[test]
    fn luma_weights() {
        assert_eq!(Rgb::BLACK.luma(), 0.0);
        assert!((Rgb::WHITE.luma() - 255.0).abs() < 1e-9);
        assert!((Rgb(255, 0, 0).luma() - 76.245).abs() < 1e-9);
    }
}
