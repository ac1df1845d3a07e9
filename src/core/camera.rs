use super::constants::*;
use super::state::Cursor;
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera looking down -Z from a local position.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov_y_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection();
        cam
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect.max(f32::EPSILON),
            self.near,
            self.far,
        );
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

/// Camera parented to a group so parallax can move the group while scroll
/// moves the camera itself.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub group: Vec3,
    pub camera: PerspectiveCamera,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        let mut camera = PerspectiveCamera::new(CAMERA_FOV_Y_DEG, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.position = Vec3::new(0.0, 0.0, CAMERA_Z);
        Self {
            group: Vec3::ZERO,
            camera,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.group + self.camera.position
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection() * self.view()
    }

    /// One distance unit of vertical travel per viewport height scrolled.
    pub fn follow_scroll(&mut self, offset: f64, viewport_height: f64, distance: f32) {
        self.camera.position.y = scroll_camera_y(offset, viewport_height, distance);
    }

    /// Ease the group toward the cursor target.
    pub fn parallax(&mut self, cursor: Cursor, dt: f32) {
        let target = parallax_target(cursor);
        let kx = (PARALLAX_RATE_X * dt).clamp(0.0, 1.0);
        let ky = (PARALLAX_RATE_Y * dt).clamp(0.0, 1.0);
        self.group.x += (target.x - self.group.x) * kx;
        self.group.y += (target.y - self.group.y) * ky;
    }
}

#[inline]
pub fn scroll_camera_y(offset: f64, viewport_height: f64, distance: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    -(offset / viewport_height) as f32 * distance
}

#[inline]
pub fn parallax_target(cursor: Cursor) -> Vec2 {
    Vec2::new(
        cursor.x * PARALLAX_AMPLITUDE,
        -cursor.y * PARALLAX_AMPLITUDE,
    )
}
