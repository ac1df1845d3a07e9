use super::constants::*;

/// Static configuration consumed once by the scene initializer.
///
/// Defaults reproduce the stock page. A URL query string can override the
/// colors, the distance unit and the particle count, e.g.
/// `?color=ffeded&distance=5&particles=1200`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Linear RGB base color of the shared toon material.
    pub material_color: [f32; 3],
    /// Linear RGB color of the particle field.
    pub particle_color: [f32; 3],
    /// Vertical world distance between consecutive section meshes.
    pub distance: f32,
    pub particle_count: usize,
    pub gradient_url: String,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            material_color: parse_hex_color(DEFAULT_MATERIAL_COLOR).unwrap_or([1.0; 3]),
            particle_color: parse_hex_color(DEFAULT_PARTICLE_COLOR).unwrap_or([1.0; 3]),
            distance: DEFAULT_OBJECTS_DISTANCE,
            particle_count: DEFAULT_PARTICLE_COUNT,
            gradient_url: DEFAULT_GRADIENT_URL.to_string(),
        }
    }
}

impl SceneParams {
    /// Build parameters from a `location.search` style string.
    ///
    /// Unknown keys are ignored. Malformed values keep the default and log a
    /// warning.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.trim_start_matches('?');
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            match key {
                "color" => match parse_hex_color(value) {
                    Some(c) => params.material_color = c,
                    None => log::warn!("[params] ignoring color={value}"),
                },
                "particleColor" => match parse_hex_color(value) {
                    Some(c) => params.particle_color = c,
                    None => log::warn!("[params] ignoring particleColor={value}"),
                },
                "distance" => match value.parse::<f32>() {
                    Ok(d) if d.is_finite() => params.distance = d.clamp(0.0, MAX_OBJECTS_DISTANCE),
                    _ => log::warn!("[params] ignoring distance={value}"),
                },
                "particles" => match value.parse::<usize>() {
                    Ok(n) => params.particle_count = n.min(MAX_PARTICLE_COUNT),
                    Err(_) => log::warn!("[params] ignoring particles={value}"),
                },
                _ => {}
            }
        }
        params
    }
}

/// Parse `rrggbb` (optionally prefixed by `#` or `%23`) into linear RGB.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("%23"))
        .unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| -> Option<f32> {
        let v = u8::from_str_radix(&hex[i..i + 2], 16).ok()?;
        Some(srgb_to_linear(v as f32 / 255.0))
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
