//! Random number generation module, built on the "rand" crate that is the Rust
//! standard for RNGs.

mod standard;

/// Select the RNG implementation in use
pub use self::standard::RandGenerator as RandomGenerator;
