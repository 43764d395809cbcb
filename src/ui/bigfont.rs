//! Big-font glyph rendering.
//!
//! Wraps a FIGfont and memoizes rendered text, since the clock face re-renders
//! the same strings once per second. The cache is cleared wholesale once it
//! grows past a fixed bound; entries are pure functions of their key, so a
//! cleared entry is simply re-rendered.

use crate::error::{AppError, AppResult};
use figlet_rs::FIGfont;
use std::collections::HashMap;

/// Cache entries kept before a wholesale clear.
///
const CACHE_LIMIT: usize = 100;

/// Block-art renderer with a bounded memo cache.
///
pub struct BigFont {
    font: FIGfont,
    cache: HashMap<String, Vec<String>>,
}

impl BigFont {
    /// Load the embedded standard FIGfont.
    ///
    pub fn new() -> AppResult<Self> {
        let font = FIGfont::standard().map_err(AppError::Font)?;
        Ok(BigFont {
            font,
            cache: HashMap::new(),
        })
    }

    /// Expand text into block-art lines, trailing blank lines stripped.
    /// Unconvertible text falls back to the text itself as a single line.
    ///
    pub fn render(&mut self, text: &str) -> Vec<String> {
        if let Some(lines) = self.cache.get(text) {
            return lines.clone();
        }
        if self.cache.len() > CACHE_LIMIT {
            self.cache.clear();
        }
        let lines = self.expand(text);
        self.cache.insert(text.to_string(), lines.clone());
        lines
    }

    fn expand(&self, text: &str) -> Vec<String> {
        let figure = match self.font.convert(text) {
            Some(figure) => figure,
            None => return vec![text.to_string()],
        };
        let mut lines: Vec<String> = figure.to_string().lines().map(str::to_string).collect();
        while lines.last().map_or(false, |l| l.trim().is_empty()) {
            lines.pop();
        }
        lines
    }

    #[cfg(test)]
    fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_multi_line_art() {
        let mut font = BigFont::new().unwrap();
        let lines = font.render("12:34:56");
        assert!(lines.len() > 1);
        assert!(lines.iter().any(|l| !l.trim().is_empty()));
    }

    #[test]
    fn test_render_strips_trailing_blank_lines() {
        let mut font = BigFont::new().unwrap();
        let lines = font.render("08:00:00");
        assert!(!lines.last().unwrap().trim().is_empty());
    }

    #[test]
    fn test_render_is_cached() {
        let mut font = BigFont::new().unwrap();
        let first = font.render("23:59:59");
        assert_eq!(font.cache_len(), 1);
        let second = font.render("23:59:59");
        assert_eq!(font.cache_len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_clears_past_limit() {
        let mut font = BigFont::new().unwrap();
        for i in 0..=CACHE_LIMIT {
            font.render(&format!("{:03}", i));
        }
        assert_eq!(font.cache_len(), CACHE_LIMIT + 1);
        font.render("overflow");
        assert_eq!(font.cache_len(), 1);
    }

    #[test]
    fn test_render_same_text_matches_direct_expansion() {
        let mut font = BigFont::new().unwrap();
        let cached = font.render("10:10:10");
        let direct = font.expand("10:10:10");
        assert_eq!(cached, direct);
    }
}
