//! Rendering options and configuration.

/// Options for rendering article content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix HTML output with a table of contents navigation block
    pub include_toc: bool,

    /// Title shown above the table of contents
    pub toc_title: String,

    /// Open links in a new browsing context (`target="_blank"`)
    pub external_links: bool,

    /// Reading speed used for the reading time estimate
    pub words_per_minute: u32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the table of contents block.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// Set the table of contents title.
    pub fn with_toc_title(mut self, title: impl Into<String>) -> Self {
        self.toc_title = title.into();
        self
    }

    /// Enable or disable new-context links.
    pub fn with_external_links(mut self, external: bool) -> Self {
        self.external_links = external;
        self
    }

    /// Set the reading speed (minimum 1 word per minute).
    pub fn with_words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = wpm.max(1);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_toc: false,
            toc_title: "On this page".to_string(),
            external_links: true,
            words_per_minute: 200,
        }
    }
}
