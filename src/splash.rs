//! Splash screen registration and rendering.

use std::io::Write;

use crate::ansi;
use crate::config::SplashConfig;
use crate::error::{Result, SplashError};
use crate::measure::{pad_line, target_width};
use crate::source::{EntropySource, RandomSource};

/// A collection of splash screens and the configuration to render them.
///
/// Register banners once during startup, then write one at random per
/// launch:
///
/// ```
/// use termsplash::SplashScreen;
///
/// let mut splash = SplashScreen::new();
/// splash.add_splash("my-service\nready to serve");
///
/// let mut out = Vec::new();
/// splash.write_splash(&mut out).unwrap();
/// assert!(out.ends_with(b"\x1b[0m\n"));
/// ```
pub struct SplashScreen {
    config: SplashConfig,
    splashes: Vec<String>,
    source: Box<dyn RandomSource>,
}

impl SplashScreen {
    /// A renderer with the default configuration and no splashes.
    pub fn new() -> Self {
        Self::with_config(SplashConfig::default())
    }

    /// A renderer with explicit configuration, selecting through the
    /// entropy-backed default source.
    pub fn with_config(config: SplashConfig) -> Self {
        Self::with_source(config, Box::new(EntropySource::new()))
    }

    /// A renderer drawing selection indices from `source`.
    ///
    /// Selection is the only nondeterminism in this crate, so injecting a
    /// seeded or scripted source makes output fully reproducible.
    pub fn with_source(config: SplashConfig, source: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            splashes: Vec::new(),
            source,
        }
    }

    /// Register a splash: one string, normally several lines separated by
    /// `\n`. Stored verbatim in call order; nothing is validated or
    /// deduplicated, so registering a splash twice doubles its odds.
    pub fn add_splash(&mut self, splash: impl Into<String>) {
        self.splashes.push(splash.into());
    }

    /// The active configuration.
    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    /// The registered splashes, in registration order.
    pub fn splashes(&self) -> &[String] {
        &self.splashes
    }

    /// Number of registered splashes.
    pub fn len(&self) -> usize {
        self.splashes.len()
    }

    /// Whether no splash has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.splashes.is_empty()
    }

    /// Write a random splash screen to `out`, followed by a line feed.
    ///
    /// The banner is composed in full before the stream is touched, so a
    /// failed selection writes zero bytes. Stream errors propagate
    /// unmodified and nothing is retried.
    pub fn write_splash<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let banner = self.render_splash()?;
        out.write_all(banner.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }

    /// Compose a random splash screen as a styled string.
    ///
    /// Same selection and styling as [`write_splash`](Self::write_splash)
    /// without the stream or the trailing line feed.
    pub fn render_splash(&mut self) -> Result<String> {
        if self.splashes.is_empty() {
            return Err(SplashError::EmptyCollection);
        }

        let index = self.source.next_index(self.splashes.len());
        tracing::debug!(index, count = self.splashes.len(), "selected splash");

        Ok(self.compose(&self.splashes[index]))
    }

    /// Pad every line of `text` to a common width and wrap it in SGR
    /// styling: background, foreground, attributes, content, reset. Each
    /// line carries its own reset so it stays self-contained when copied
    /// or filtered.
    fn compose(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = target_width(&lines, self.config.min_width);

        let mut out = String::with_capacity(lines.len() * (width + 32));
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // fmt writes into a String cannot fail.
            ansi::bg_256(&mut out, self.config.background).ok();
            ansi::fg_256(&mut out, self.config.foreground).ok();
            ansi::attrs(&mut out, self.config.attrs).ok();
            out.push_str(&pad_line(line, width));
            ansi::reset(&mut out).ok();
        }
        out
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}
