//! License census: turns `(package, license)` associations into ranked statistics.
//!
//! - [`table`] — [`LicenseTable`] and [`aggregate`], one pass over the package source.
//! - [`rank`] — stable descending-by-count ordering ([`Ranking`]).
//! - [`views`] — the four read-only result views built on a [`Ranking`].

pub mod rank;
pub mod table;
pub mod views;

pub use rank::{rank, Ranking};
pub use table::{aggregate, LicenseTable};
