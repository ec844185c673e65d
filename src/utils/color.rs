// src/utils/color.rs
use md5::{Digest, Md5};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TagError};
use crate::models::TagName;
use crate::utils::validation::validate_color_hex;

const BLACK: &str = "#000000";
const WHITE: &str = "#FFFFFF";

/// A `#rrggbb` color, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHex(String);

impl ColorHex {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn channels(&self) -> [u8; 3] {
        let mut rgb = [0u8; 3];
        // Validated on construction, so decoding cannot fail.
        if let Ok(bytes) = hex::decode(&self.0[1..]) {
            rgb.copy_from_slice(&bytes);
        }
        rgb
    }

    /// Perceived brightness of the color in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.channels();
        (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
    }

    /// Black for light backgrounds, white for dark ones.
    pub fn contrast(&self) -> ColorHex {
        if 1.0 - self.luminance() < 0.5 {
            ColorHex(BLACK.to_string())
        } else {
            ColorHex(WHITE.to_string())
        }
    }
}

impl FromStr for ColorHex {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        if !validate_color_hex(s) {
            return Err(TagError::InvalidColor(s.to_string()));
        }
        let digits = s.trim_start_matches('#');
        Ok(ColorHex(format!("#{}", digits)))
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Background color for a tag, derived from the MD5 digest of its name.
pub fn background_color<T: TagName + ?Sized>(tag: &T) -> ColorHex {
    let digest = Md5::digest(tag.tag_name().as_bytes());
    ColorHex(format!("#{}", &hex::encode(digest)[..6]))
}

/// Text color readable on top of `bg`.
pub fn foreground_color(bg: &str) -> Result<ColorHex> {
    Ok(bg.parse::<ColorHex>()?.contrast())
}
