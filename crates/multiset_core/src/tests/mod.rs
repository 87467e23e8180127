//! Router behavior tests
//!
//! Tests are organized by topic:
//! - `properties` - Invariants that hold for every screen
//! - `scenarios` - Concrete navigation walkthroughs, including failures

mod properties;
