use bevy::math::Vec2;

pub fn smooth(current: f32, target: f32, factor: f32) -> f32 {
    (target - current).mul_add(factor, current)
}

/// Converts a per-frame smoothing factor measured at `reference_fps` into the
/// factor for a frame lasting `delta_secs`.
pub fn frame_factor(per_frame: f32, reference_fps: f32, delta_secs: f32) -> f32 {
    if delta_secs <= 0.0 || reference_fps <= 0.0 {
        return 0.0;
    }
    let factor = 1.0 - (1.0 - per_frame).powf(delta_secs * reference_fps);
    factor.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub target: Vec2,
    pub scale: f32,
    pub target_scale: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::at_rest(Vec2::ZERO)
    }
}

impl Motion {
    pub const fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            target: position,
            scale: 1.0,
            target_scale: 1.0,
        }
    }

    pub fn stepped(self, factor: f32) -> Self {
        Self {
            position: self.position.lerp(self.target, factor),
            scale: smooth(self.scale, self.target_scale, factor),
            ..self
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && (self.scale - self.target_scale).abs() <= f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_moves_toward_target() {
        let motion = Motion {
            position: Vec2::ZERO,
            target: Vec2::new(100.0, -40.0),
            scale: 1.0,
            target_scale: 2.0,
        };
        let next = motion.stepped(0.25);
        assert!(
            (next.position - Vec2::new(25.0, -10.0)).length() < 1e-4,
            "got {:?}",
            next.position
        );
        assert!((next.scale - 1.25).abs() < 1e-6, "got {}", next.scale);
        assert_eq!(next.target, motion.target, "targets are untouched");
    }

    #[test]
    fn full_factor_snaps_and_settled_is_fixed_point() {
        let motion = Motion {
            position: Vec2::new(3.0, 4.0),
            target: Vec2::new(10.0, 10.0),
            scale: 1.5,
            target_scale: 1.0,
        };
        let snapped = motion.stepped(1.0);
        assert!(snapped.is_settled(), "factor one reaches the target");
        assert_eq!(snapped.stepped(0.15), snapped, "settled motion does not drift");
    }

    #[test]
    fn frame_factor_matches_reference_rate() {
        let one_frame = frame_factor(0.15, 60.0, 1.0 / 60.0);
        assert!((one_frame - 0.15).abs() < 1e-5, "got {one_frame}");

        let two_frames = frame_factor(0.15, 60.0, 2.0 / 60.0);
        let expected = 1.0 - 0.85_f32 * 0.85;
        assert!((two_frames - expected).abs() < 1e-5, "got {two_frames}");

        assert!(frame_factor(0.15, 60.0, 0.0).abs() < f32::EPSILON, "no time, no motion");
    }
}
