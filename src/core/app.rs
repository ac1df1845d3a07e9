use super::animator::{Animator, Ease, RotationTween};
use super::camera::CameraRig;
use super::constants::*;
use super::params::SceneParams;
use super::scene::Scene;
use super::scroll::SectionTracker;
use super::state::{Cursor, InputEvent, Viewport};
use glam::Vec3;

/// What a handled input event changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub viewport_changed: bool,
    pub entered_section: Option<usize>,
}

impl Effects {
    fn merge(&mut self, other: Effects) {
        self.viewport_changed |= other.viewport_changed;
        if other.entered_section.is_some() {
            self.entered_section = other.entered_section;
        }
    }
}

/// Everything the frame loop reads and mutates: the scene plus the input
/// state the listeners report.
pub struct AppState {
    pub params: SceneParams,
    pub scene: Scene,
    pub viewport: Viewport,
    pub scroll_offset: f64,
    pub cursor: Cursor,
    pub sections: SectionTracker,
    pub animator: Animator,
    pub rig: CameraRig,
}

impl AppState {
    pub fn new(params: SceneParams, scene: Scene, viewport: Viewport, scroll_offset: f64) -> Self {
        // Section tracking starts at 0 even on a restored page, so the first
        // scroll event spins the section the page opened on.
        let sections = SectionTracker::new(scene.meshes.len());
        let mut rig = CameraRig::new(viewport.aspect());
        rig.follow_scroll(scroll_offset, viewport.height, params.distance);
        Self {
            params,
            scene,
            viewport,
            scroll_offset,
            cursor: Cursor::default(),
            sections,
            animator: Animator::new(),
            rig,
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Effects {
        let mut fx = Effects::default();
        match event {
            InputEvent::Resize {
                width,
                height,
                device_pixel_ratio,
            } => {
                if self.viewport.resize(width, height, device_pixel_ratio) {
                    self.rig.camera.set_aspect(self.viewport.aspect());
                    fx.viewport_changed = true;
                }
            }
            InputEvent::Scroll { offset } => {
                self.scroll_offset = offset;
                if let Some(section) = self.sections.observe(offset, self.viewport.height) {
                    log::debug!("[scroll] entered section {section}");
                    self.animator.start(
                        section,
                        RotationTween::new(
                            Vec3::from_array(SECTION_SPIN_DELTA),
                            SECTION_SPIN_DURATION_SEC,
                            Ease::Power2InOut,
                        ),
                    );
                    fx.entered_section = Some(section);
                }
            }
            InputEvent::PointerMove { client_x, client_y } => {
                self.cursor = Cursor::from_client(client_x, client_y, &self.viewport);
            }
        }
        fx
    }

    /// Apply a batch of queued events in arrival order.
    pub fn handle_all<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) -> Effects {
        let mut fx = Effects::default();
        for ev in events {
            fx.merge(self.handle(ev));
        }
        fx
    }

    /// Per-frame update: idle spin, scroll tweens, camera scroll and parallax.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let spin = Vec3::new(IDLE_SPIN_X, IDLE_SPIN_Y, 0.0) * dt;
        for mesh in &mut self.scene.meshes {
            mesh.rotation += spin;
        }

        let mut rotations: Vec<Vec3> = self.scene.meshes.iter().map(|m| m.rotation).collect();
        self.animator.advance(dt, &mut rotations);
        for (mesh, rot) in self.scene.meshes.iter_mut().zip(rotations) {
            mesh.rotation = rot;
        }

        self.rig
            .follow_scroll(self.scroll_offset, self.viewport.height, self.params.distance);
        self.rig.parallax(self.cursor, dt);
    }
}
