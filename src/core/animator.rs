use glam::Vec3;
use smallvec::SmallVec;

/// Easing curves available to rotation tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    #[cfg_attr(not(test), allow(dead_code))]
    Linear,
    /// Cubic in-out: slow start, fast middle, slow finish.
    Power2InOut,
}

impl Ease {
    /// Map normalized time `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A relative rotation animation.
///
/// The tween never writes an absolute value: each step yields the increment
/// since the previous step, so concurrent tweens and the idle spin add up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTween {
    pub delta: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
    applied: f32,
}

impl RotationTween {
    pub fn new(delta: Vec3, duration: f32, ease: Ease) -> Self {
        Self {
            delta,
            duration,
            elapsed: 0.0,
            ease,
            applied: 0.0,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// True once the full delta has been handed out.
    #[inline]
    pub fn finished(&self) -> bool {
        self.applied >= 1.0
    }

    /// Advance by `dt` seconds and return the rotation increment to apply.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt.max(0.0);
        let eased = self.ease.apply(self.progress());
        let step = eased - self.applied;
        self.applied = eased;
        self.delta * step
    }
}

/// Active tweens, keyed by the index of the mesh they rotate.
#[derive(Debug, Default)]
pub struct Animator {
    active: SmallVec<[(usize, RotationTween); 4]>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween on `target`. Earlier tweens on the same target keep
    /// running; nothing is cancelled.
    pub fn start(&mut self, target: usize, tween: RotationTween) {
        self.active.push((target, tween));
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_animating(&self, target: usize) -> bool {
        self.active.iter().any(|(t, _)| *t == target)
    }

    /// Advance all tweens, adding their increments into `rotations`.
    /// Tweens whose target is out of range are dropped.
    pub fn advance(&mut self, dt: f32, rotations: &mut [Vec3]) {
        for (target, tween) in self.active.iter_mut() {
            if let Some(rot) = rotations.get_mut(*target) {
                *rot += tween.advance(dt);
            } else {
                tween.applied = 1.0;
            }
        }
        self.active.retain(|(_, tween)| !tween.finished());
    }
}
