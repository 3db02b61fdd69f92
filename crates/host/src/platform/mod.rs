//! Host platform bindings.

pub mod clock;

pub use clock::SystemClock;
