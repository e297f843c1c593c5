//! Android tooling integration: running `aapt`/`aapt2` and making sense of what they print.

pub mod aapt;
pub mod aapt2;
pub mod dump;
pub mod icons;
pub mod line;
