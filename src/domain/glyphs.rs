//! The repeating character line glyphs are drawn from, and the host-side
//! glyph measurement seam used to keep cells wide enough.

use super::config::VortexConfig;

const NBSP: char = '\u{00A0}';

/// Reference glyph measured when checking that a cell fits the font.
pub const REFERENCE_GLYPH: char = 'M';

/// Words joined by the separator into one line of chars, e.g.
/// `TRAJECTORY•PROPULSION•Δv•...•`. Never empty.
#[derive(Clone, Debug)]
pub struct GlyphLine {
    chars: Vec<char>,
    filler: char,
}

impl GlyphLine {
    pub fn from_config(config: &VortexConfig) -> Self {
        Self::new(&config.words, &config.separator, config.filler_glyph)
    }

    pub fn new(words: &[String], separator: &str, filler: char) -> Self {
        let mut chars = Vec::new();
        for word in words.iter().filter(|w| !w.trim().is_empty()) {
            chars.extend(word.trim().chars().map(|c| if c == ' ' { NBSP } else { c }));
            chars.extend(separator.chars().map(|c| if c == ' ' { NBSP } else { c }));
        }
        if chars.is_empty() {
            chars.push(filler);
        }
        Self { chars, filler }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyph for agent `index` at `elapsed_ms`: the line scrolls by
    /// `floor(elapsed_ms * rate)` positions. Blank glyphs fall back to the filler.
    #[inline]
    pub fn glyph_at(&self, index: usize, elapsed_ms: f64, rate: f64) -> char {
        let len = self.chars.len();
        let shift = (elapsed_ms.max(0.0) * rate).floor() as u64 % len as u64;
        let ch = self.chars[(index % len + shift as usize) % len];
        if ch.is_whitespace() {
            self.filler
        } else {
            ch
        }
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Measures glyph advance widths on whatever surface the host renders to.
pub trait GlyphMetrics {
    fn glyph_width(&self, font_px: f32, glyph: char) -> f32;
}

/// Monospace approximation: every glyph is `advance` em wide.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMetrics {
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn glyph_width(&self, font_px: f32, _glyph: char) -> f32 {
        font_px * self.advance
    }
}

/// Width measured once by the host.
#[derive(Clone, Copy, Debug)]
pub struct FixedMetrics(pub f32);

impl GlyphMetrics for FixedMetrics {
    fn glyph_width(&self, _font_px: f32, _glyph: char) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn line_joins_words_with_trailing_separator() {
        let line = GlyphLine::new(&words(&["AB", "C"]), "•", '•');
        assert_eq!(line.as_string(), "AB•C•");
    }

    #[test]
    fn inner_spaces_become_no_break() {
        let line = GlyphLine::new(&words(&["ORBITAL MECH"]), "•", '•');
        assert!(!line.as_string().contains(' '));
        assert_eq!(line.glyph_at(7, 0.0, 0.06), '•');
    }

    #[test]
    fn empty_words_fall_back_to_filler() {
        let line = GlyphLine::new(&[], "•", '*');
        assert_eq!(line.len(), 1);
        assert_eq!(line.glyph_at(42, 1234.0, 0.06), '*');

        let blank = GlyphLine::new(&words(&["  ", ""]), "", '*');
        assert_eq!(blank.as_string(), "*");
    }

    #[test]
    fn glyph_scrolls_with_time() {
        let line = GlyphLine::new(&words(&["ABCD"]), "", '•');
        assert_eq!(line.glyph_at(0, 0.0, 0.06), 'A');
        // floor(12 * 0.25) = 3
        assert_eq!(line.glyph_at(0, 12.0, 0.25), 'D');
        assert_eq!(line.glyph_at(1, 12.0, 0.25), 'A');
    }
}
