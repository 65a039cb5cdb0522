//! Change detection for interactively edited grass fields.
//!
//! Hosts with live editing poll the tracker with the current parameters and
//! anchor; runtime hosts skip it and generate once.

use glam::{Vec2, Vec3};

use super::config::GenerationParameters;

/// Vector inputs closer than this are treated as unchanged
pub const VECTOR_EPSILON: f32 = 1e-5;

/// Parameters and anchor as of the last successful build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangeSnapshot {
    pub params: GenerationParameters,
    pub anchor: Vec3,
}

impl ChangeSnapshot {
    pub fn new(params: GenerationParameters, anchor: Vec3) -> Self {
        Self { params, anchor }
    }

    /// Field-wise comparison. Scalars compare exactly, vectors within
    /// `VECTOR_EPSILON` so sub-micron gizmo jitter does not rebuild.
    /// Identical bit patterns always match, NaN included.
    pub fn differs_from(&self, other: &ChangeSnapshot) -> bool {
        self.params.blade_count != other.params.blade_count
            || !same_f32(self.params.cast_height, other.params.cast_height)
            || !vec2_near(self.params.footprint_size, other.params.footprint_size)
            || !vec3_near(self.anchor, other.anchor)
    }
}

fn same_f32(a: f32, b: f32) -> bool {
    a == b || a.to_bits() == b.to_bits()
}

fn vec2_near(a: Vec2, b: Vec2) -> bool {
    (same_f32(a.x, b.x) && same_f32(a.y, b.y))
        || a.distance_squared(b) < VECTOR_EPSILON * VECTOR_EPSILON
}

fn vec3_near(a: Vec3, b: Vec3) -> bool {
    (same_f32(a.x, b.x) && same_f32(a.y, b.y) && same_f32(a.z, b.z))
        || a.distance_squared(b) < VECTOR_EPSILON * VECTOR_EPSILON
}

/// Whether a field with inputs `current` needs rebuilding.
///
/// `previous` is None when nothing has been built yet.
pub fn regenerate_if_changed(current: &ChangeSnapshot, previous: Option<&ChangeSnapshot>) -> bool {
    match previous {
        None => true,
        Some(prev) => current.differs_from(prev),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackerState {
    /// Last build matches the inputs
    #[default]
    Idle,
    /// Inputs changed; a rebuild is due
    Dirty,
}

/// Two-state tracker around [`regenerate_if_changed`].
///
/// `poll` moves to Dirty on a change. `commit` records the inputs of a
/// finished build and returns to Idle. A failed build is never committed,
/// so the next poll stays Dirty.
#[derive(Clone, Debug, Default)]
pub struct ChangeTracker {
    state: TrackerState,
    last: Option<ChangeSnapshot>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == TrackerState::Dirty
    }

    pub fn last_snapshot(&self) -> Option<&ChangeSnapshot> {
        self.last.as_ref()
    }

    /// Compare `current` against the last commit; returns true if a rebuild is due.
    pub fn poll(&mut self, current: &ChangeSnapshot) -> bool {
        if regenerate_if_changed(current, self.last.as_ref()) {
            self.state = TrackerState::Dirty;
        }
        self.is_dirty()
    }

    /// Record a finished build.
    pub fn commit(&mut self, built: ChangeSnapshot) {
        self.last = Some(built);
        self.state = TrackerState::Idle;
    }
}
