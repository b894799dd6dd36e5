//! Color specifications used by plot details.
//!
//! Colors are written the way plotting configuration usually spells them: a named color
//! (`"skyblue"`), a single-letter shorthand (`"k"`), a `tab:` palette entry (`"tab:orange"`) or
//! a hex triplet (`"#1f77b4"`, `"#fa0"`).

use plotters::style::RGBColor;

use crate::error::{Error, Result};

/// Parses a color specification, case-insensitively
pub fn parse(spec: &str) -> Result<RGBColor> {
    let spec = spec.trim().to_ascii_lowercase();

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(&spec));
    }

    named(&spec).ok_or_else(|| invalid(&spec))
}

fn invalid(spec: &str) -> Error {
    Error::InvalidDetails(format!("unknown color '{}'", spec))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some(RGBColor(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            // #abc == #aabbcc
            let mut rgb = [0u8; 3];
            for (dst, c) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *dst = nibble * 17;
            }
            Some(RGBColor(rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}

fn named(name: &str) -> Option<RGBColor> {
    let (r, g, b) = match name {
        "b" | "blue" => (0, 0, 255),
        "g" | "green" => (0, 128, 0),
        "r" | "red" => (255, 0, 0),
        "c" | "cyan" | "aqua" => (0, 255, 255),
        "m" | "magenta" | "fuchsia" => (255, 0, 255),
        "y" | "yellow" => (255, 255, 0),
        "k" | "black" => (0, 0, 0),
        "w" | "white" => (255, 255, 255),
        "gray" | "grey" => (128, 128, 128),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "silver" => (192, 192, 192),
        "orange" => (255, 165, 0),
        "darkorange" => (255, 140, 0),
        "gold" => (255, 215, 0),
        "purple" => (128, 0, 128),
        "violet" => (238, 130, 238),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "olive" => (128, 128, 0),
        "maroon" => (128, 0, 0),
        "lime" => (0, 255, 0),
        "coral" => (255, 127, 80),
        "salmon" => (250, 128, 114),
        "tomato" => (255, 99, 71),
        "crimson" => (220, 20, 60),
        "skyblue" => (135, 206, 235),
        "lightblue" => (173, 216, 230),
        "steelblue" => (70, 130, 180),
        "royalblue" => (65, 105, 225),
        "dodgerblue" => (30, 144, 255),
        "lightgreen" => (144, 238, 144),
        "seagreen" => (46, 139, 87),
        "forestgreen" => (34, 139, 34),
        "darkgreen" => (0, 100, 0),
        "khaki" => (240, 230, 140),
        "tan" => (210, 180, 140),
        "plum" => (221, 160, 221),
        "orchid" => (218, 112, 214),
        "turquoise" => (64, 224, 208),
        "indigo" => (75, 0, 130),
        "tab:blue" => (31, 119, 180),
        "tab:orange" => (255, 127, 14),
        "tab:green" => (44, 160, 44),
        "tab:red" => (214, 39, 40),
        "tab:purple" => (148, 103, 189),
        "tab:brown" => (140, 86, 75),
        "tab:pink" => (227, 119, 194),
        "tab:gray" | "tab:grey" => (127, 127, 127),
        "tab:olive" => (188, 189, 34),
        "tab:cyan" => (23, 190, 207),
        _ => return None,
    };

    Some(RGBColor(r, g, b))
}
