//! Platform feature objects and their unlockable animations
//!
//! Each platform carries one decorative structure (torii gate, pagoda,
//! taiko drum, stone lantern). Gathering every collectible on the platform
//! sets a one-way latch that unlocks the structure's animation; once
//! unlocked, the animation can be paused and resumed freely.

use serde::{Serialize, Deserialize};
use torii_physics::Aabb;

use crate::scene::Color;

/// Animation behavior of a feature object, one payload per kind
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FeatureAnim {
    /// Spin around the Y axis
    Rotate {
        /// Degrees per second
        spin_dps: f32,
    },
    /// Pulse in size around the rest scale
    Scale {
        /// Oscillation rate in radians per second
        pulse_rate: f32,
        /// Peak deviation from scale 1.0
        pulse_amount: f32,
    },
    /// Bob up and down
    Translate {
        /// Oscillation rate in radians per second
        bob_rate: f32,
        /// Peak vertical offset in world units
        bob_amount: f32,
    },
    /// Cycle the glow color intensity
    ColorCycle {
        /// Oscillation rate in radians per second
        cycle_rate: f32,
    },
}

impl FeatureAnim {
    /// Spin at the standard rate
    pub fn rotate() -> Self {
        Self::Rotate { spin_dps: 90.0 }
    }

    /// Pulse at the standard rate and amount
    pub fn scale() -> Self {
        Self::Scale { pulse_rate: 1.8, pulse_amount: 0.18 }
    }

    /// Bob at the standard rate and amount
    pub fn translate() -> Self {
        Self::Translate { bob_rate: 1.6, bob_amount: 0.7 }
    }

    /// Color-cycle at the standard rate
    pub fn color_cycle() -> Self {
        Self::ColorCycle { cycle_rate: 2.4 }
    }
}

/// Evaluated animation state at a point in time
///
/// Rendering is out of scope here; the pose is the testable output of the
/// animation machinery, one variant per [`FeatureAnim`] kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeaturePose {
    Rotate { angle_deg: f32 },
    Scale { factor: f32 },
    Translate { offset_y: f32 },
    ColorCycle { shift: f32 },
}

/// The per-platform feature structure with its unlock gating
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FeatureObj {
    /// Collision box; the animation never changes the physical extents
    pub aabb: Aabb,
    pub color: Color,
    pub anim: FeatureAnim,
    all_collected: bool,
    anim_enabled: bool,
    t: f32,
}

impl FeatureObj {
    /// Create a locked feature with its animation at rest
    pub fn new(aabb: Aabb, color: Color, anim: FeatureAnim) -> Self {
        Self {
            aabb,
            color,
            anim,
            all_collected: false,
            anim_enabled: false,
            t: 0.0,
        }
    }

    /// Whether the platform's collectibles have all been gathered
    ///
    /// One-way latch; stays set until a full scene reset.
    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.all_collected
    }

    /// Whether the animation is currently running
    #[inline]
    pub fn anim_enabled(&self) -> bool {
        self.anim_enabled
    }

    /// Accumulated animation time in seconds
    #[inline]
    pub fn time(&self) -> f32 {
        self.t
    }

    /// Set the latch and auto-start the animation
    ///
    /// Idempotent: re-unlocking an unlocked feature changes nothing, in
    /// particular it does not restart a paused animation.
    pub fn unlock(&mut self) {
        if !self.all_collected {
            self.all_collected = true;
            self.anim_enabled = true;
        }
    }

    /// Toggle the animation, allowed only after the latch is set
    ///
    /// Returns whether the toggle applied.
    pub fn toggle_anim(&mut self) -> bool {
        if self.all_collected {
            self.anim_enabled = !self.anim_enabled;
            true
        } else {
            false
        }
    }

    /// Advance animation time; paused animations hold their pose
    pub fn advance(&mut self, dt: f32) {
        if self.anim_enabled {
            self.t += dt;
        }
    }

    /// Evaluate the current animation pose
    pub fn pose(&self) -> FeaturePose {
        match self.anim {
            FeatureAnim::Rotate { spin_dps } => FeaturePose::Rotate {
                angle_deg: if self.anim_enabled {
                    (self.t * spin_dps) % 360.0
                } else {
                    0.0
                },
            },
            FeatureAnim::Scale { pulse_rate, pulse_amount } => FeaturePose::Scale {
                factor: if self.anim_enabled {
                    1.0 + pulse_amount * (self.t * pulse_rate).sin()
                } else {
                    1.0
                },
            },
            FeatureAnim::Translate { bob_rate, bob_amount } => FeaturePose::Translate {
                offset_y: if self.anim_enabled {
                    bob_amount * (self.t * bob_rate).sin()
                } else {
                    0.0
                },
            },
            FeatureAnim::ColorCycle { cycle_rate } => FeaturePose::ColorCycle {
                shift: if self.anim_enabled {
                    0.3 + 0.7 * (0.5 + 0.5 * (self.t * cycle_rate).sin())
                } else {
                    0.4
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torii_math::Vec3;

    const EPSILON: f32 = 0.0001;

    fn feature(anim: FeatureAnim) -> FeatureObj {
        FeatureObj::new(
            Aabb::new(Vec3::new(0.0, 2.6, 0.0), Vec3::new(1.6, 2.6, 1.0)),
            [0.8, 0.15, 0.15],
            anim,
        )
    }

    #[test]
    fn test_starts_locked_and_at_rest() {
        let f = feature(FeatureAnim::rotate());
        assert!(!f.is_unlocked());
        assert!(!f.anim_enabled());
        assert_eq!(f.pose(), FeaturePose::Rotate { angle_deg: 0.0 });
    }

    #[test]
    fn test_toggle_gated_by_latch() {
        let mut f = feature(FeatureAnim::scale());
        assert!(!f.toggle_anim());
        assert!(!f.anim_enabled());

        f.unlock();
        assert!(f.anim_enabled());
        assert!(f.toggle_anim());
        assert!(!f.anim_enabled());
        assert!(f.toggle_anim());
        assert!(f.anim_enabled());
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut f = feature(FeatureAnim::translate());
        f.unlock();
        assert!(f.toggle_anim()); // pause
        f.unlock();
        // Re-unlock must not restart the paused animation
        assert!(f.is_unlocked());
        assert!(!f.anim_enabled());
    }

    #[test]
    fn test_time_only_advances_while_enabled() {
        let mut f = feature(FeatureAnim::rotate());
        f.advance(1.0);
        assert_eq!(f.time(), 0.0);

        f.unlock();
        f.advance(1.0);
        assert!((f.time() - 1.0).abs() < EPSILON);

        f.toggle_anim(); // pause
        f.advance(1.0);
        assert!((f.time() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_pose_wraps() {
        let mut f = feature(FeatureAnim::Rotate { spin_dps: 90.0 });
        f.unlock();
        f.advance(5.0); // 450 degrees
        match f.pose() {
            FeaturePose::Rotate { angle_deg } => assert!((angle_deg - 90.0).abs() < 0.001),
            other => panic!("wrong pose variant: {:?}", other),
        }
    }

    #[test]
    fn test_scale_pose_pulses() {
        let mut f = feature(FeatureAnim::Scale { pulse_rate: 1.0, pulse_amount: 0.2 });
        f.unlock();
        f.advance(std::f32::consts::FRAC_PI_2); // sin = 1
        match f.pose() {
            FeaturePose::Scale { factor } => assert!((factor - 1.2).abs() < EPSILON),
            other => panic!("wrong pose variant: {:?}", other),
        }
    }

    #[test]
    fn test_translate_pose_bobs() {
        let mut f = feature(FeatureAnim::Translate { bob_rate: 1.0, bob_amount: 0.7 });
        f.unlock();
        f.advance(std::f32::consts::FRAC_PI_2);
        match f.pose() {
            FeaturePose::Translate { offset_y } => assert!((offset_y - 0.7).abs() < EPSILON),
            other => panic!("wrong pose variant: {:?}", other),
        }
    }

    #[test]
    fn test_color_cycle_rest_shift() {
        let f = feature(FeatureAnim::color_cycle());
        assert_eq!(f.pose(), FeaturePose::ColorCycle { shift: 0.4 });
    }

    #[test]
    fn test_collision_box_unaffected_by_animation() {
        let mut f = feature(FeatureAnim::translate());
        let before = f.aabb;
        f.unlock();
        f.advance(2.0);
        assert_eq!(f.aabb, before);
    }
}
