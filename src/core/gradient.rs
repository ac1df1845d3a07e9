use super::constants::FALLBACK_GRADIENT;

/// RGBA8 pixels of the toon gradient lookup, read left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl GradientImage {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("empty gradient image ({width}x{height})");
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            anyhow::bail!(
                "gradient pixel data is {} bytes, expected {expected}",
                rgba.len()
            );
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Built-in three-band gradient used when the image cannot be loaded.
    pub fn fallback() -> Self {
        let rgba = FALLBACK_GRADIENT
            .iter()
            .flat_map(|&l| [l, l, l, 255])
            .collect();
        Self {
            width: FALLBACK_GRADIENT.len() as u32,
            height: 1,
            rgba,
        }
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}
