use linktint::Color;

/// Parse a user-facing color argument into a [`Color`].
///
/// Accepts `#rrggbb` hex (e.g. `#1a0dab`) or three comma-separated floats
/// in [0, 1] (e.g. `0,0,1`).
pub fn parse_color(input: &str) -> Result<Color, String> {
    let input = input.trim();

    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color: '{input}' (expected #rrggbb)"));
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map(|v| f64::from(v) / 255.0)
        };
        let r = component(0..2).map_err(|_| format!("invalid hex color: '{input}'"))?;
        let g = component(2..4).map_err(|_| format!("invalid hex color: '{input}'"))?;
        let b = component(4..6).map_err(|_| format!("invalid hex color: '{input}'"))?;
        return Ok(Color::Rgb(r, g, b));
    }

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "invalid color: '{input}' (expected #rrggbb or r,g,b)"
        ));
    }
    let mut components = [0.0; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        let value: f64 = part
            .parse()
            .map_err(|_| format!("invalid color component: '{part}'"))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(format!(
                "color component {value} out of range (expected [0, 1])"
            ));
        }
        *slot = value;
    }
    Ok(Color::Rgb(components[0], components[1], components[2]))
}
