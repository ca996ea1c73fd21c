//! Transit detectability.

pub mod snr;

pub use snr::*;
