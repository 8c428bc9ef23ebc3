//! Visual tokens spawned by the emitters.
//!
//! A sprite is plain data: where it sits, how big it is, how long it
//! animates. The stage turns it into a node using `class_name`, `glyph` and
//! `style_properties`.

use std::f64::consts::TAU;
use std::ops::Range;

use fastrand::Rng;

use crate::config::{BurstConfig, HeartConfig};

/// Uniform sample over `[start, end)`.
pub(crate) fn uniform(rng: &mut Rng, span: &Range<f64>) -> f64 {
    span.start + rng.f64() * (span.end - span.start)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Heart,
    Sparkle,
}

impl Glyph {
    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Heart => "❤",
            Glyph::Sparkle => "✨",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub left_pct: f64,
    pub font_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FloatingHeart {
    pub fn sample(rng: &mut Rng, config: &HeartConfig) -> Self {
        Self {
            left_pct: uniform(rng, &config.left_pct),
            font_px: uniform(rng, &config.font_px),
            duration_s: uniform(rng, &config.duration_s),
            delay_s: uniform(rng, &config.delay_s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurstParticle {
    /// Radians, measured from the positive x axis.
    pub angle: f64,
    pub distance: f64,
    pub x: f64,
    pub y: f64,
    pub glyph: Glyph,
    pub duration_ms: f64,
}

impl BurstParticle {
    /// Particle `index` of `count`, placed on an even angular grid with a
    /// random radial jitter.
    pub fn sample(rng: &mut Rng, config: &BurstConfig, index: usize, count: usize) -> Self {
        let glyph = if rng.bool() { Glyph::Heart } else { Glyph::Sparkle };
        let angle = TAU * index as f64 / count as f64;
        let distance = uniform(rng, &config.distance);
        Self {
            angle,
            distance,
            x: angle.cos() * distance,
            y: angle.sin() * distance - config.lift,
            glyph,
            duration_ms: uniform(rng, &config.duration_ms),
        }
    }

    /// One full ring of particles.
    pub fn ring(rng: &mut Rng, config: &BurstConfig) -> Vec<Self> {
        let count = config.particles;
        (0..count)
            .map(|i| Self::sample(rng, config, i, count))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sprite {
    Heart(FloatingHeart),
    Burst(BurstParticle),
}

impl Sprite {
    pub fn class_name(&self) -> &'static str {
        match self {
            Sprite::Heart(_) => "float-heart",
            Sprite::Burst(_) => "burst-heart",
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            Sprite::Heart(_) => Glyph::Heart,
            Sprite::Burst(p) => p.glyph,
        }
    }

    /// Inline CSS properties as `(name, value)` pairs.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        match self {
            Sprite::Heart(h) => vec![
                ("left", format!("{}%", h.left_pct)),
                ("font-size", format!("{}px", h.font_px)),
                ("animation-duration", format!("{}s", h.duration_s)),
                ("animation-delay", format!("{}s", h.delay_s)),
            ],
            Sprite::Burst(p) => vec![
                ("--x", format!("{}px", p.x)),
                ("--y", format!("{}px", p.y)),
                ("animation-duration", format!("{}ms", p.duration_ms)),
            ],
        }
    }
}
