//! Language detection and the static language/style/creative-type catalogs.

pub mod catalog;
pub mod detector;
pub mod handlers;

pub use catalog::language_name;
pub use detector::detect_language;
