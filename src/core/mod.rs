//! Core utilities shared by every layer: hot-path indexing macros,
//! console logging and the easing math behind the morph.

#[path = "utils/safety.rs"]
#[macro_use]
pub mod safety;
#[path = "utils/console.rs"]
#[macro_use]
pub mod console;
pub mod math;
