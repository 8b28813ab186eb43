//! Small helpers shared across modules.

pub mod html;
mod plural;

pub use plural::plural_count;
