// Scene tuning constants shared by the pure core and the web frontend.

// Defaults for the runtime-tunable parameters (see `params.rs`)
pub const DEFAULT_MATERIAL_COLOR: &str = "7fcffb";
pub const DEFAULT_PARTICLE_COLOR: &str = "ff88cc";
pub const DEFAULT_OBJECTS_DISTANCE: f32 = 4.0; // world units between section meshes
pub const DEFAULT_PARTICLE_COUNT: usize = 500;
pub const DEFAULT_GRADIENT_URL: &str = "textures/gradients/3.png";

// Accepted ranges for query overrides
pub const MAX_OBJECTS_DISTANCE: f32 = 10.0;
pub const MAX_PARTICLE_COUNT: usize = 20_000;

// Section meshes: horizontal offset of each mesh, alternating sides
pub const SECTION_X_OFFSETS: [f32; 3] = [2.0, -2.0, 2.0];

// Torus
pub const TORUS_RADIUS: f32 = 1.0;
pub const TORUS_TUBE: f32 = 0.4;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 60;

// Cone
pub const CONE_RADIUS: f32 = 1.0;
pub const CONE_HEIGHT: f32 = 2.0;
pub const CONE_RADIAL_SEGMENTS: u32 = 32;

// Torus knot
pub const KNOT_RADIUS: f32 = 0.8;
pub const KNOT_TUBE: f32 = 0.35;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

// Particles
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent, centered on the origin
pub const PARTICLE_SIZE: f32 = 0.03;

// Light
pub const LIGHT_POSITION: [f32; 3] = [2.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 1.0;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 6.0;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Idle spin (radians per second)
pub const IDLE_SPIN_X: f32 = 0.2;
pub const IDLE_SPIN_Y: f32 = 0.12;

// Parallax
pub const PARALLAX_AMPLITUDE: f32 = 0.5;
pub const PARALLAX_RATE_X: f32 = 2.0;
pub const PARALLAX_RATE_Y: f32 = 5.0; // vertical settles faster

// Section-change spin
pub const SECTION_SPIN_DELTA: [f32; 3] = [3.0, 6.0, 1.0];
pub const SECTION_SPIN_DURATION_SEC: f32 = 1.0;

// Used when the gradient image cannot be loaded
pub const FALLBACK_GRADIENT: [u8; 3] = [0, 128, 255];
