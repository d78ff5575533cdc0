//! Prompt text resolution and caching.
//!
//! A prompt is either fixed text or a generator invoked each time the prompt is
//! shown (clock, working directory, exit status, ...). The resolved text and its
//! visual width are cached until the next display so every repaint within one
//! line edit uses the same prompt. Width is measured on the color-stripped
//! text.

use core_text::{str_width, strip_ansi};
use std::fmt;

/// Where prompt text comes from.
pub enum PromptSource {
    Static(String),
    Dynamic(Box<dyn FnMut() -> String>),
}

impl PromptSource {
    pub fn dynamic<F>(generator: F) -> Self
    where
        F: FnMut() -> String + 'static,
    {
        PromptSource::Dynamic(Box::new(generator))
    }

    /// Produce the prompt text for one display.
    pub fn resolve(&mut self) -> String {
        match self {
            PromptSource::Static(text) => text.clone(),
            PromptSource::Dynamic(generator) => generator(),
        }
    }
}

impl fmt::Debug for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptSource::Static(text) => f.debug_tuple("Static").field(text).finish(),
            PromptSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for PromptSource {
    fn from(text: &str) -> Self {
        PromptSource::Static(text.to_string())
    }
}

impl From<String> for PromptSource {
    fn from(text: String) -> Self {
        PromptSource::Static(text)
    }
}

/// A prompt source plus the text/width cached for the current display.
#[derive(Debug)]
pub struct Prompt {
    source: PromptSource,
    text: String,
    width: usize,
}

impl Prompt {
    /// Static prompts are cached immediately; dynamic ones stay empty until `refresh`.
    pub fn new(source: impl Into<PromptSource>) -> Self {
        let source = source.into();
        let initial = match &source {
            PromptSource::Static(text) => text.clone(),
            PromptSource::Dynamic(_) => String::new(),
        };
        let mut prompt = Self {
            source,
            text: String::new(),
            width: 0,
        };
        prompt.cache(initial);
        prompt
    }

    /// Resolve the source again (called once per prompt display).
    pub fn refresh(&mut self) -> &str {
        let text = self.source.resolve();
        self.cache(text);
        &self.text
    }

    fn cache(&mut self, text: String) {
        self.width = str_width(&strip_ansi(&text));
        self.text = text;
    }

    /// Cached prompt text, color sequences included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Visual width of the cached text with color sequences removed.
    pub fn width(&self) -> usize {
        self.width
    }
}
