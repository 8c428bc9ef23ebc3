//! Tunables for every effect on the page.
//!
//! Nothing here is read from disk or the environment; `Default` carries the
//! values the page ships with and tests build their own where they need to.

use std::ops::Range;

use crate::schedule::Millis;

/// Floating heart emitter timing and sampling ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartConfig {
    /// Number of staggered creations fired on start.
    pub initial_count: u32,
    pub initial_stagger: Millis,
    /// Period of the unbounded creation interval.
    pub period: Millis,
    /// Fixed lifetime of each heart, independent of its animation.
    pub ttl: Millis,
    pub left_pct: Range<f64>,
    pub font_px: Range<f64>,
    pub duration_s: Range<f64>,
    pub delay_s: Range<f64>,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            initial_count: 16,
            initial_stagger: 360,
            period: 650,
            ttl: 16_000,
            left_pct: 0.0..100.0,
            font_px: 12.0..30.0,
            duration_s: 7.0..15.0,
            delay_s: 0.0..1.4,
        }
    }
}

/// Radial burst shown while the finale zone is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstConfig {
    pub particles: usize,
    pub distance: Range<f64>,
    /// Upward shift applied to every particle.
    pub lift: f64,
    pub duration_ms: Range<f64>,
    pub ttl: Millis,
    pub period: Millis,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particles: 30,
            distance: 60.0..180.0,
            lift: 24.0,
            duration_ms: 900.0..1600.0,
            ttl: 1_700,
            period: 2_200,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Fraction of a reveal target that must be visible.
    pub threshold: f64,
    /// Fraction of the finale zone that must be visible.
    pub finale_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.22,
            finale_threshold: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub picks: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { picks: 6 }
    }
}

/// CSS selectors the browser stage resolves page slots with.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSelectors {
    pub floating_hearts: &'static str,
    pub burst_zone: &'static str,
    pub reveal: &'static str,
    pub gallery: &'static str,
    pub finale: &'static str,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            floating_hearts: ".floating-hearts",
            burst_zone: "#heart-burst",
            reveal: ".reveal",
            gallery: "#poke-gallery",
            finale: "#forever",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectConfig {
    pub hearts: HeartConfig,
    pub burst: BurstConfig,
    pub reveal: RevealConfig,
    pub gallery: GalleryConfig,
    pub selectors: PageSelectors,
}
