//! Domain types shared across the helpers.
//!
//! This module defines:
//!
//! - option structs with defaults (`ClipOptions`, `TransitParams`)
//! - owned results (`ClipResult`, `Spectrum`)

pub mod types;

pub use types::*;
