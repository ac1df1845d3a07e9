use super::constants::MAX_PIXEL_RATIO;

/// Window size in CSS pixels plus the display density it was measured at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Renderer pixel ratio, capped to bound fill cost on dense displays.
    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.width / self.height.max(1.0)) as f32
    }

    /// Backing store size of the canvas in device pixels.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        let w = (self.width * pr).floor().max(1.0) as u32;
        let h = (self.height * pr).floor().max(1.0) as u32;
        (w, h)
    }

    /// Apply new dimensions. Returns `false` when nothing changed, so a
    /// repeated resize with identical values is a no-op downstream.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) -> bool {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return false;
        }
        let next = Self::new(width, height, device_pixel_ratio);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }
}

/// Pointer position as an offset from the viewport center, in `[-0.5, 0.5]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn from_client(client_x: f64, client_y: f64, viewport: &Viewport) -> Self {
        Self {
            x: (client_x / viewport.width.max(1.0) - 0.5) as f32,
            y: (client_y / viewport.height.max(1.0) - 0.5) as f32,
        }
    }
}

/// Messages produced by the browser listeners and consumed by the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Resize {
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
    },
    Scroll {
        offset: f64,
    },
    PointerMove {
        client_x: f64,
        client_y: f64,
    },
}
