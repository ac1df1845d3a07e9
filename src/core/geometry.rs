use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list, counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(MeshVertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
    }

    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Ring torus in the XY plane.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let v = j as f32 / radial_segments as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(p, (p - center).normalize_or_zero());
        }
    }
    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.tri(a, b, d);
            mesh.tri(b, c, d);
        }
    }
    mesh
}

/// Cone along +Y, apex on top, closed at the base.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let slope = radius / height;

    // side: two rings, apex ring collapsed to a point
    for (row, r) in [0.0_f32, radius].into_iter().enumerate() {
        let y = half - row as f32 * height;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let p = Vec3::new(r * sin, y, r * cos);
            let n = Vec3::new(sin, slope, cos).normalize();
            mesh.push(p, n);
        }
    }
    let row = radial_segments + 1;
    for x in 0..radial_segments {
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        mesh.tri(b, c, d);
    }

    // base cap
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..radial_segments {
        mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y);
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push(Vec3::new(radius * sin, -half, radius * cos), Vec3::NEG_Y);
    }
    for x in 0..radial_segments {
        let c = center_start + x;
        let i = ring_start + x;
        mesh.tri(i + 1, i, c);
    }
    mesh
}

/// (p, q) torus knot swept with a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let (pf, qf) = (p as f32, q as f32);
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * pf * TAU;
        let p1 = knot_point(u, pf, qf, radius);
        let p2 = knot_point(u + 0.01, pf, qf, radius);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.push(pos, (pos - p1).normalize_or_zero());
        }
    }
    let row = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.tri(a, b, d);
            mesh.tri(b, c, d);
        }
    }
    mesh
}

fn knot_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}
