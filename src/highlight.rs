use inksac::prelude::*;

/// Styled terminal output with graceful fallback when the terminal
/// reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color_support: ColorSupport,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A painter that never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn apply(&self, text: &str, style: Style) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    /// Bold red, used for the `Error:` prefix.
    pub fn error(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Red).bold().build();
        self.apply(text, style)
    }

    /// Plain red, used for the `×` marker on usage errors.
    pub fn warn(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Red).build();
        self.apply(text, style)
    }

    /// Blue, used for gutters and tree glyphs.
    pub fn accent(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Blue).build();
        self.apply(text, style)
    }

    /// Cyan, used for directory names and inline tab markers.
    pub fn dir(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Cyan).build();
        self.apply(text, style)
    }

    /// Magenta, used for file names in listings.
    pub fn file(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Magenta).build();
        self.apply(text, style)
    }

    /// Yellow, used for the encoding tag and banner art.
    pub fn tag(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Yellow).build();
        self.apply(text, style)
    }

    /// Green, used for confirmations and the prompt path.
    pub fn success(&self, text: &str) -> String {
        let style = Style::builder().foreground(Color::Green).build();
        self.apply(text, style)
    }
}
