//! Camera focus on a selected item.
//!
//! On the map a focus is instant. On the globe the camera glides from where it
//! is to a point above the item over a fixed number of frames, easing out
//! cubically and always looking at the globe center.

use foundation::{Vec3, ease_out_cubic, to_cartesian};
use layers::GlobeView;
use scene::{DatasetKind, ViewMode};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocusAnimation {
    pub kind: DatasetKind,
    pub start: Vec3,
    pub target: Vec3,
    /// Steps already applied; the animation ends after `steps`.
    pub step: u32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum FocusState {
    #[default]
    Idle,
    Animating(FocusAnimation),
}

#[derive(Debug, Clone)]
pub struct FocusController {
    state: FocusState,
    steps: u32,
    camera_distance: f64,
}

impl FocusController {
    pub fn new(steps: u32, camera_distance: f64) -> Self {
        Self {
            state: FocusState::Idle,
            steps: steps.max(1),
            camera_distance,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, FocusState::Animating(_))
    }

    /// Starts gliding from `from` towards the point above `(lat, lon)`,
    /// replacing any animation still running. Returns the target.
    pub fn start(&mut self, kind: DatasetKind, lat_deg: f64, lon_deg: f64, from: Vec3) -> Vec3 {
        let target = to_cartesian(lat_deg, lon_deg, self.camera_distance);
        if self.cancel() {
            tracing::debug!(%kind, "focus animation superseded");
        }
        self.state = FocusState::Animating(FocusAnimation {
            kind,
            start: from,
            target,
            step: 0,
        });
        target
    }

    /// Drops the running animation, leaving the camera where it is.
    pub fn cancel(&mut self) -> bool {
        let was_animating = self.is_animating();
        self.state = FocusState::Idle;
        was_animating
    }

    /// Applies one animation step to `globe`.
    ///
    /// The animation is cancelled instead when it no longer applies: a different
    /// page is showing, the page left globe mode, or there is no globe.
    pub fn advance<G: GlobeView>(
        &mut self,
        current: DatasetKind,
        mode: ViewMode,
        globe: Option<&mut G>,
    ) -> Option<Vec3> {
        let FocusState::Animating(mut anim) = self.state else {
            return None;
        };
        let Some(globe) = globe.filter(|_| anim.kind == current && mode == ViewMode::Globe)
        else {
            tracing::debug!(kind = %anim.kind, "focus animation no longer live");
            self.state = FocusState::Idle;
            return None;
        };

        anim.step += 1;
        let progress = ease_out_cubic(anim.step as f64 / self.steps as f64);
        let position = anim.start.lerp(anim.target, progress);
        globe.set_camera_position(position);
        globe.look_at(Vec3::ZERO);

        self.state = if anim.step >= self.steps {
            FocusState::Idle
        } else {
            FocusState::Animating(anim)
        };
        Some(position)
    }
}
