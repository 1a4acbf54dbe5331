//! Decoder for the indexed-colour XPM text format used by the icon set.
//!
//! The source is a list of strings: a `"width height colors chars_per_pixel"`
//! header, one `"<key> c <colour>"` line per palette entry (colour is
//! `#RRGGBB` or `None`), then `height` rows of `width * chars_per_pixel`
//! characters.

use std::collections::HashMap;

use crate::error::IconError;
use crate::surface::Bitmap;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

pub fn decode(source: &[&str]) -> Result<Bitmap, IconError> {
    let (header, rest) = source.split_first().ok_or(IconError::MissingHeader)?;
    let (width, height, colors, cpp) = parse_header(header)?;

    if rest.len() < colors {
        return Err(IconError::Color(format!(
            "expected {} palette entries, found {}",
            colors,
            rest.len()
        )));
    }
    let (color_lines, rows) = rest.split_at(colors);

    let mut palette = HashMap::with_capacity(colors);
    for line in color_lines {
        let (key, rgba) = parse_color(line, cpp)?;
        palette.insert(key, rgba);
    }

    if rows.len() != height {
        return Err(IconError::RowCount {
            expected: height,
            found: rows.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width * height);
    for (row, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != width * cpp {
            return Err(IconError::RowWidth {
                row,
                found: chars.len() / cpp,
                expected: width,
            });
        }
        for key in chars.chunks(cpp) {
            let key: String = key.iter().collect();
            match palette.get(&key) {
                Some(rgba) => pixels.push(*rgba),
                None => return Err(IconError::UnknownKey { row, key }),
            }
        }
    }

    Ok(Bitmap::new(width as u32, height as u32, pixels))
}

fn parse_header(header: &str) -> Result<(usize, usize, usize, usize), IconError> {
    let fields: Vec<usize> = header
        .split_whitespace()
        .map(|field| field.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|err| IconError::Header(format!("{:?}: {}", header, err)))?;

    match fields.as_slice() {
        [w, h, c, cpp, ..] if *w > 0 && *h > 0 && *c > 0 && *cpp > 0 => Ok((*w, *h, *c, *cpp)),
        _ => Err(IconError::Header(header.to_string())),
    }
}

fn parse_color(line: &str, cpp: usize) -> Result<(String, [u8; 4]), IconError> {
    let key: String = line.chars().take(cpp).collect();
    if key.chars().count() != cpp {
        return Err(IconError::Color(line.to_string()));
    }
    let spec: String = line.chars().skip(cpp).collect();
    let mut parts = spec.split_whitespace();

    match (parts.next(), parts.next()) {
        (Some("c"), Some(value)) => Ok((key, parse_rgb(value).ok_or_else(|| IconError::Color(line.to_string()))?)),
        _ => Err(IconError::Color(line.to_string())),
    }
}

fn parse_rgb(value: &str) -> Option<[u8; 4]> {
    if value.eq_ignore_ascii_case("none") {
        return Some(TRANSPARENT);
    }
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?, 255])
}
