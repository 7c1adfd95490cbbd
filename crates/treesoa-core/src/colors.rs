//! Terminal palette for layout listings.
//!
//! Roles rather than hues: callers pick the role of the text they print
//! and the palette decides the escape code.

/// ANSI escape codes per listing role. All empty when colors are off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Section headers (`[buffers]`).
    pub section: &'static str,
    /// Buffer names.
    pub name: &'static str,
    /// Storage type names.
    pub ty: &'static str,
    /// Counts, owners, and other secondary detail.
    pub meta: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        section: "\x1b[1;34m",
        name: "\x1b[34m",
        ty: "\x1b[32m",
        meta: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        section: "",
        name: "",
        ty: "",
        meta: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
