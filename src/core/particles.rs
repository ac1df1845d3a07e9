use super::constants::PARTICLE_SPREAD;
use rand::Rng;

/// Random particle positions, packed as `[x, y, z]` triples.
///
/// x and z cover `[-spread/2, spread/2)`; y starts half a section above the
/// first mesh and extends down past the last one.
pub fn particle_positions<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    distance: f32,
    sections: usize,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    let top = distance * 0.5;
    let depth = distance * sections as f32;
    for _ in 0..count {
        out.push((rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD);
        out.push(top - rng.gen::<f32>() * depth);
        out.push((rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD);
    }
    out
}

/// Vertical span `(min, max]` particle y values fall into.
#[cfg_attr(not(test), allow(dead_code))]
pub fn particle_y_range(distance: f32, sections: usize) -> (f32, f32) {
    let top = distance * 0.5;
    (top - distance * sections as f32, top)
}
