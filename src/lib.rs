//! Decorative effects for the love page: floating hearts, a finale burst,
//! scroll reveals and a randomized artwork gallery.
//!
//! The effect logic is target independent and runs against the [`Stage`],
//! [`Scheduler`] and [`Viewport`] traits. Browser bindings for those traits
//! are only compiled for wasm32.

pub mod burst;
pub mod catalog;
pub mod config;
pub mod error;
pub mod finale;
pub mod gallery;
pub mod hearts;
pub mod page;
pub mod reveal;
pub mod schedule;
pub mod sprite;
pub mod stage;
pub mod transient;
pub mod viewport;

pub use config::EffectConfig;
pub use error::{Error, Result};
pub use page::Page;
pub use schedule::{IntervalId, Millis, Scheduler};
pub use stage::{Slot, Stage};
pub use viewport::{Observation, Viewport};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
