//! # termsplash
//!
//! Random splash screens for terminal services.
//!
//! A [`SplashScreen`] holds any number of registered banner texts. Each
//! render picks one at random, pads every line to a common width, wraps
//! every line in ANSI 256-color styling, and writes the result plus a
//! trailing line feed to any [`std::io::Write`].
//!
//! ```
//! use termsplash::{SplashConfig, SplashScreen};
//!
//! let mut splash = SplashScreen::with_config(SplashConfig::new().with_min_width(12));
//! splash.add_splash("db-gateway\nlistening");
//!
//! let mut out = Vec::new();
//! splash.write_splash(&mut out).unwrap();
//! assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 2);
//! ```
//!
//! Selection is the only nondeterminism. It flows through the
//! [`RandomSource`] trait, so tests inject a seeded [`rand::rngs::StdRng`]
//! or a scripted [`SequenceSource`] and assert on exact bytes.
//!
//! ## Modules
//!
//! - [`splash`] - registration, selection, rendering
//! - [`config`] - construction-time configuration with builder overrides
//! - [`ansi`] - SGR escape sequence emitters and the [`Attr`] flags
//! - [`measure`] - code-point widths, padding, escape stripping
//! - [`source`] - injectable random selection
//! - [`error`] - error taxonomy

pub mod ansi;
pub mod config;
pub mod error;
pub mod measure;
pub mod source;
pub mod splash;

// Re-export commonly used items
pub use ansi::Attr;
pub use config::SplashConfig;
pub use error::{Result, SplashError};
pub use measure::{line_width, pad_line, strip_ansi, target_width};
pub use source::{EntropySource, RandomSource, SequenceSource};
pub use splash::SplashScreen;
