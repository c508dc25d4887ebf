//! Hex color helpers shared by event validation and label rendering.

/// Parse a `#RRGGBB` (or bare `RRGGBB`) string into its channels.
pub fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Check for a `#RRGGBB` color.
pub fn is_valid_hex_color(color: &str) -> bool {
    color.starts_with('#') && parse_rgb(color).is_some()
}

/// Text color (black or white) that stays readable on `hex_color`.
///
/// Uses perceived luminance `(0.299r + 0.587g + 0.114b) / 255`; anything
/// above one half gets black text. Unparseable colors get white.
pub fn get_contrast_color(hex_color: &str) -> &'static str {
    let Some((r, g, b)) = parse_rgb(hex_color) else {
        return "#ffffff";
    };

    let luminance =
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;

    if luminance > 0.5 {
        "#000000"
    } else {
        "#ffffff"
    }
}
