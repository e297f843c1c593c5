//! # android-apk
//!
//! Resolve the launcher icons of an Android package for every screen configuration.
//!
//! The default icon path comes from the manifest (e.g. `res/mipmap-mdpi-v4/ic_launcher.png`).
//! Its siblings for other densities only live in the resource table, which is read by running
//! `aapt dump resources` or `aapt2 dump resources` and scanning the output around that path.
//!
//! ```no_run
//! use android_apk::configuration::{Configuration, ResourceFinderType};
//! use std::path::Path;
//!
//! let finder = Configuration::new(ResourceFinderType::Aapt2).resource_finder();
//! let icons = finder.resolve_icons_in_arsc(
//!     Path::new("sample.apk"),
//!     Some("res/drawable-mdpi/ic_launcher.png"),
//! );
//! for (config, path) in &icons {
//!     println!("{config}: {path}");
//! }
//! ```

pub mod android;
pub mod configuration;
pub mod resource_finder;
#[cfg(test)]
mod tests;
pub mod types;

pub use configuration::{Configuration, ResourceFinderType};
pub use resource_finder::{ResolveIcons, ResourceFinder};
pub use types::{DumpText, IconConfigMap, ResourceError, DEFAULT_RESOURCE_CONFIG};
