//! Renderer configuration.

use crate::ansi::Attr;

/// Configuration for a [`SplashScreen`](crate::SplashScreen).
///
/// A plain value. Override what you need builder-style before handing it
/// to the renderer; the renderer keeps its own copy, so configuration is
/// fixed for that renderer's lifetime.
///
/// ```
/// use termsplash::{Attr, SplashConfig};
///
/// let config = SplashConfig::new()
///     .with_min_width(40)
///     .with_foreground(39)
///     .with_background(17);
///
/// assert_eq!(config.min_width, 40);
/// assert_eq!(config.attrs, Attr::BOLD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashConfig {
    /// Minimum padded width in code points. Banners narrower than this are
    /// space-filled out to it; wider banners set the width themselves.
    pub min_width: usize,
    /// 256-color palette index for the text.
    pub foreground: u8,
    /// 256-color palette index for the fill.
    pub background: u8,
    /// Attributes applied to every line.
    pub attrs: Attr,
}

impl SplashConfig {
    /// The default configuration: minimum width 80, magenta text (palette
    /// index 125) on an orange fill (214), bold.
    pub const fn new() -> Self {
        Self {
            min_width: 80,
            foreground: 125,
            background: 214,
            attrs: Attr::BOLD,
        }
    }

    /// Set the minimum padded width in code points.
    pub const fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Set the foreground palette index.
    pub const fn with_foreground(mut self, index: u8) -> Self {
        self.foreground = index;
        self
    }

    /// Set the background palette index.
    pub const fn with_background(mut self, index: u8) -> Self {
        self.background = index;
        self
    }

    /// Set the attribute flags, replacing the default bold.
    pub const fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self::new()
    }
}
