use super::constants::*;
use super::geometry::{self, MeshData};
use super::params::SceneParams;
use super::particles::particle_positions;
use glam::{Mat4, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Torus,
    Cone,
    TorusKnot,
}

impl Shape {
    pub const SECTIONS: [Shape; 3] = [Shape::Torus, Shape::Cone, Shape::TorusKnot];

    pub fn build(self) -> MeshData {
        match self {
            Shape::Torus => geometry::torus(
                TORUS_RADIUS,
                TORUS_TUBE,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            Shape::Cone => geometry::cone(CONE_RADIUS, CONE_HEIGHT, CONE_RADIAL_SEGMENTS),
            Shape::TorusKnot => geometry::torus_knot(
                KNOT_RADIUS,
                KNOT_TUBE,
                KNOT_TUBULAR_SEGMENTS,
                KNOT_RADIAL_SEGMENTS,
                KNOT_P,
                KNOT_Q,
            ),
        }
    }
}

/// One mesh per page section; position is fixed, rotation is animated.
#[derive(Clone, Debug)]
pub struct SectionMesh {
    pub shape: Shape,
    pub geometry: MeshData,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl SectionMesh {
    /// Translation followed by X, then Y, then Z rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToonMaterial {
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    pub color: [f32; 3],
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface toward the light (target at origin).
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Every renderable object on the page, built once before the first frame.
#[derive(Clone, Debug)]
pub struct Scene {
    pub meshes: Vec<SectionMesh>,
    pub material: ToonMaterial,
    pub particles: Vec<f32>,
    pub particle_material: PointsMaterial,
    pub light: DirectionalLight,
}

impl Scene {
    pub fn build<R: Rng + ?Sized>(params: &SceneParams, rng: &mut R) -> Self {
        let meshes: Vec<SectionMesh> = Shape::SECTIONS
            .iter()
            .enumerate()
            .map(|(i, &shape)| SectionMesh {
                shape,
                geometry: shape.build(),
                position: Vec3::new(SECTION_X_OFFSETS[i], -params.distance * i as f32, 0.0),
                rotation: Vec3::ZERO,
            })
            .collect();
        let particles =
            particle_positions(rng, params.particle_count, params.distance, meshes.len());
        Self {
            meshes,
            material: ToonMaterial {
                color: params.material_color,
            },
            particles,
            particle_material: PointsMaterial {
                color: params.particle_color,
                size: PARTICLE_SIZE,
            },
            light: DirectionalLight {
                position: Vec3::from_array(LIGHT_POSITION),
                color: [1.0, 1.0, 1.0],
                intensity: LIGHT_INTENSITY,
            },
        }
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn particle_count(&self) -> usize {
        self.particles.len() / 3
    }
}
