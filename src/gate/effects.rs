//! Background decoration that must go quiet while a modal is open.
//!
//! Two producers read the pause flag: scroll-driven effects and the
//! floating particle spawner. Only the modal controller writes it.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_EMOJI: &[&str] = &[
    "🥬", "🍅", "🧄", "🌶️", "🧀", "🥒", "🥕", "🫒", "🌽", "🥑", "🥖", "🍖", "🐟", "🐔",
];

/// Chance that a spawner tick produces a particle
const SPAWN_PROBABILITY: f64 = 0.2;

/// Navbar switches to its elevated style past this offset
const NAVBAR_ELEVATION_PX: f64 = 100.0;

/// Scroll indicator is fully faded at this offset
const INDICATOR_FADE_PX: f64 = 300.0;

/// Shared pause flag for background animation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPause {
    paused: bool,
}

impl AnimationPause {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn pause(&mut self) {
        self.paused = true;
    }

    pub(crate) fn resume(&mut self) {
        self.paused = false;
    }
}

// =============================================================================
// Scroll effects
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffects {
    pub navbar_elevated: bool,
    /// 1.0 at the top of the page, 0.0 once scrolled past the fade distance
    pub indicator_opacity: f64,
}

impl ScrollEffects {
    pub fn at(offset: f64) -> Self {
        Self {
            navbar_elevated: offset > NAVBAR_ELEVATION_PX,
            indicator_opacity: (1.0 - offset / INDICATOR_FADE_PX).clamp(0.0, 1.0),
        }
    }
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::at(0.0)
    }
}

// =============================================================================
// Floating particles
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub emoji: &'static str,
    /// Horizontal start position as a fraction of the viewport width
    pub left_fraction: f64,
    pub size_px: f64,
    pub duration: Duration,
}

/// The periodic particle spawner and the particles currently on screen.
///
/// A running field is driven by one ticking task identified by its
/// generation; halting bumps the generation so the task notices and exits.
pub struct ParticleField {
    running: bool,
    generation: u64,
    next_id: u64,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            running: false,
            generation: 0,
            next_id: 0,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Start spawning. Returns the generation for the new ticking task, or
    /// `None` if one is already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Stop spawning and drop every particle in flight.
    pub fn halt(&mut self) {
        if self.running {
            self.generation += 1;
        }
        self.running = false;
        self.particles.clear();
    }

    /// Whether the ticking task for `generation` should keep going.
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }

    /// One spawner tick. May add a particle and returns it.
    pub fn tick(&mut self, generation: u64) -> Option<Particle> {
        if !self.is_current(generation) || !self.rng.gen_bool(SPAWN_PROBABILITY) {
            return None;
        }
        self.next_id += 1;
        let particle = Particle {
            id: self.next_id,
            emoji: PARTICLE_EMOJI[self.rng.gen_range(0..PARTICLE_EMOJI.len())],
            left_fraction: self.rng.gen_range(0.0..1.0),
            size_px: self.rng.gen_range(15.0..35.0),
            duration: Duration::from_millis(self.rng.gen_range(5_000..9_000)),
        };
        self.particles.push(particle.clone());
        Some(particle)
    }

    /// Remove a particle whose float-up animation has finished.
    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.particles.len();
        self.particles.retain(|p| p.id != id);
        self.particles.len() != before
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
