//! Render feature - Tree output
//!
//! Pure conversions from resolved trees to user-facing representations.
//! Nothing here prints; callers decide where output goes.

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::render_text;
