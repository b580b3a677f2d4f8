// game/evasion.rs

use bevy::math::{Rect, Vec2};
use bevy::prelude::Resource;
use rand::Rng;

use super::config::EvasionTuning;

/// Measured sizes needed to move the evasive button, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub container: Vec2,
    pub element: Vec2,
}

impl Geometry {
    pub fn new(container: Vec2, element: Vec2) -> Self {
        Self { container, element }
    }

    /// Smallest allowed top-left corner
    pub fn min_position(&self, tuning: &EvasionTuning) -> Vec2 {
        Vec2::splat(tuning.padding)
    }

    /// Largest allowed top-left corner (may be below `min_position` in tiny containers)
    pub fn max_position(&self, tuning: &EvasionTuning) -> Vec2 {
        Vec2::new(
            self.container.x - self.element.x - tuning.padding - tuning.right_margin,
            self.container.y - self.element.y - tuning.padding,
        )
    }

    /// Clamp a position into the padded container. The lower bound wins when the range is empty.
    pub fn clamp(&self, position: Vec2, tuning: &EvasionTuning) -> Vec2 {
        position
            .min(self.max_position(tuning))
            .max(self.min_position(tuning))
    }

    /// Uniform random position inside the padded container
    pub fn random_position<R: Rng + ?Sized>(&self, tuning: &EvasionTuning, rng: &mut R) -> Vec2 {
        let min = self.min_position(tuning);
        let span = (self.max_position(tuning) - min).max(Vec2::ZERO);
        min + Vec2::new(rng.random::<f32>(), rng.random::<f32>()) * span
    }
}

/// What a single pointer event did to the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvasionOutcome {
    /// Pointer was close: jumped to a random spot
    Teleported(Vec2),
    /// Pointer was near: pushed away and clamped
    Nudged(Vec2),
    /// Pointer was far away
    Unchanged,
    /// Not placed yet or measurements missing
    Skipped,
}

/// Owns the evasive button position, relative to the container's top-left corner
#[derive(Resource, Debug, Clone)]
pub struct EvasionController {
    tuning: EvasionTuning,
    position: Option<Vec2>,
}

impl EvasionController {
    pub fn new(tuning: EvasionTuning) -> Self {
        Self {
            tuning,
            position: None,
        }
    }

    /// Current position, once initial placement has happened
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Put the button right of the confirm button, top-aligned with it.
    ///
    /// `confirm` is in container coordinates (y grows downwards). Returns the
    /// new position, or `None` if the button was already placed.
    pub fn place_beside(&mut self, confirm: Rect) -> Option<Vec2> {
        if self.is_placed() {
            return None;
        }

        let position = Vec2::new(
            confirm.min.x + confirm.width() + self.tuning.placement_gap,
            confirm.min.y,
        );
        self.position = Some(position);
        Some(position)
    }

    /// React to the pointer at `pointer` (container coordinates)
    pub fn respond<R: Rng + ?Sized>(
        &mut self,
        pointer: Vec2,
        geometry: Option<Geometry>,
        rng: &mut R,
    ) -> EvasionOutcome {
        let (Some(position), Some(geometry)) = (self.position, geometry) else {
            return EvasionOutcome::Skipped;
        };

        let center = position + geometry.element * 0.5;
        let distance = pointer - center;
        let abs = distance.abs();

        if abs.x < self.tuning.teleport_radius && abs.y < self.tuning.teleport_radius {
            let target = geometry.random_position(&self.tuning, rng);
            self.position = Some(target);
            EvasionOutcome::Teleported(target)
        } else if abs.x < self.tuning.nudge_radius && abs.y < self.tuning.nudge_radius {
            let pushed = position - distance / self.tuning.repulsion_divisor;
            let target = geometry.clamp(pushed, &self.tuning);
            self.position = Some(target);
            EvasionOutcome::Nudged(target)
        } else {
            EvasionOutcome::Unchanged
        }
    }

    /// Pull a placed button back inside after the container changed size.
    ///
    /// Returns true if the position moved.
    pub fn settle(&mut self, geometry: Geometry) -> bool {
        let Some(position) = self.position else {
            return false;
        };

        let settled = geometry.clamp(position, &self.tuning);
        if settled == position {
            return false;
        }

        self.position = Some(settled);
        true
    }
}
