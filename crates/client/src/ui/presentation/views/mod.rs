//! Top-level views.

pub mod lookup;

pub use lookup::LookupView;
