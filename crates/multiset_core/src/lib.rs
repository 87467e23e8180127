//! Screen navigation core for the multiset analysis menu
//!
//! This crate owns the navigation state machine behind the analysis menu:
//! - A closed registry of screens (menu, compliance, insights)
//! - A rendering surface abstraction with one container per screen
//! - A view router that keeps exactly one screen visible and refuses
//!   selections it cannot complete
//!
//! Front ends (terminal, browser) implement [`RenderingSurface`] and drive the
//! [`ViewRouter`] with typed [`Screen`] identifiers.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod router;
pub mod screen;
pub mod surface;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::NavigationError;
pub use router::{ViewRouter, ViewState};
pub use screen::Screen;
pub use surface::{MemorySurface, RenderingSurface};
