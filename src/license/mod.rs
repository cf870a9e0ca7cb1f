//! Open-source classification of license identifiers.
//!
//! - [`defaults`] — the built-in reference list of open-source identifiers.
//! - [`classifier`] — exact-match membership test against that list (or a
//!   configured replacement).

pub mod classifier;
pub mod defaults;
