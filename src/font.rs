//! Draw tokens, glyph sources, and the ordered-fallback resolution that
//! turns symbolic content into bitmaps.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::glyphs::{self, Rows};

/// One drawable bitmap. Row-major; any nonzero cell is lit. Catalog
/// glyphs are built once from the static tables and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<Vec<u8>>,
}

impl Glyph {
    pub fn from_rows(rows: Rows) -> Self {
        Glyph { rows: rows.iter().map(|r| r.to_vec()).collect() }
    }

    pub fn from_vec(rows: Vec<Vec<u8>>) -> Self {
        Glyph { rows }
    }

    pub fn blank(width: usize, height: usize) -> Self {
        Glyph { rows: vec![vec![0; width]; height] }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Lit test with natural row-major interpretation; out of range is off.
    pub fn bit(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).and_then(|r| r.get(x)).is_some_and(|&c| c != 0)
    }
}

/// A symbolic request to draw: a digit/frame index or a named symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Digit(u8),
    Symbol(&'static str),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "digit {}", d),
            Token::Symbol(s) => write!(f, "symbol '{}'", s),
        }
    }
}

/// A named glyph catalog: a canonical digit table plus a symbol-name map.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    digits: Vec<Glyph>,
    symbols: HashMap<&'static str, Glyph>,
}

impl Catalog {
    pub fn with_digits(digit_rows: &[Rows]) -> Self {
        Catalog {
            digits: digit_rows.iter().copied().map(Glyph::from_rows).collect(),
            symbols: HashMap::new(),
        }
    }

    pub fn symbol(mut self, name: &'static str, rows: Rows) -> Self {
        self.symbols.insert(name, Glyph::from_rows(rows));
        self
    }

    fn digit(&self, d: u8) -> Option<&Glyph> {
        self.digits.get(d as usize)
    }

    fn named(&self, name: &str) -> Option<&Glyph> {
        self.symbols.get(name)
    }
}

/// Where glyph lookups go: a plain ordered frame list or a named catalog.
#[derive(Debug, Clone)]
pub enum GlyphSource {
    Indexed(Vec<Glyph>),
    Named(Catalog),
}

impl GlyphSource {
    pub fn kind(&self) -> &'static str {
        match self {
            GlyphSource::Indexed(_) => "indexed list",
            GlyphSource::Named(_) => "named catalog",
        }
    }

    fn lookup(&self, token: Token) -> Option<&Glyph> {
        match (self, token) {
            (GlyphSource::Indexed(list), Token::Digit(i)) => list.get(i as usize),
            // A bare list has no names to look up
            (GlyphSource::Indexed(_), Token::Symbol(_)) => None,
            (GlyphSource::Named(cat), Token::Digit(d)) => cat.digit(d),
            (GlyphSource::Named(cat), Token::Symbol(s)) => cat.named(s),
        }
    }
}

/// Resolves every token against one source, in order. Never substitutes:
/// the first unresolvable token fails the whole request.
pub fn resolve<'a>(tokens: &[Token], source: &'a GlyphSource) -> Result<Vec<&'a Glyph>, RenderError> {
    tokens
        .iter()
        .map(|&token| {
            source
                .lookup(token)
                .ok_or(RenderError::Resolution { token, source: source.kind() })
        })
        .collect()
}

/// Tries each source in order and commits to the first that resolves
/// every token; results are never mixed across sources.
pub fn resolve_chain<'a>(
    tokens: &[Token],
    sources: &[&'a GlyphSource],
) -> Result<Vec<&'a Glyph>, RenderError> {
    let mut last_err = RenderError::Configuration("empty font chain".to_string());
    for source in sources {
        match resolve(tokens, source) {
            Ok(found) => return Ok(found),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

/// Identifier for a built-in font, as referenced by scene descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontId {
    NumbersLarge,
    NumbersSmall,
    NumbersTiny,
    LettersTiny,
    Glyphs,
}

/// All built-in fonts, constructed once and shared by every render.
#[derive(Debug)]
pub struct FontBook {
    fonts: HashMap<FontId, GlyphSource>,
}

impl FontBook {
    pub fn builtin() -> Self {
        let mut fonts = HashMap::new();
        fonts.insert(
            FontId::NumbersLarge,
            GlyphSource::Named(
                Catalog::with_digits(&glyphs::LARGE_DIGITS)
                    .symbol("SEPARATOR", glyphs::LARGE_SEPARATOR)
                    .symbol("BLANK", glyphs::LARGE_BLANK),
            ),
        );
        fonts.insert(
            FontId::NumbersSmall,
            GlyphSource::Named(
                Catalog::with_digits(&glyphs::SMALL_DIGITS)
                    .symbol("SEPARATOR", glyphs::SMALL_SEPARATOR)
                    .symbol("BLANK", glyphs::SMALL_BLANK),
            ),
        );
        fonts.insert(
            FontId::NumbersTiny,
            GlyphSource::Named(
                Catalog::with_digits(&glyphs::TINY_DIGITS)
                    .symbol("SEPARATOR", glyphs::TINY_SEPARATOR)
                    .symbol("BLANK", glyphs::TINY_BLANK),
            ),
        );
        fonts.insert(
            FontId::LettersTiny,
            GlyphSource::Named(
                Catalog::default()
                    .symbol("E", glyphs::TINY_E)
                    .symbol("R", glyphs::TINY_R)
                    .symbol("BLANK", glyphs::TINY_BLANK),
            ),
        );
        fonts.insert(
            FontId::Glyphs,
            GlyphSource::Named(
                Catalog::default()
                    .symbol("SKULL", glyphs::SKULL)
                    .symbol("DEGREE", glyphs::DEGREE)
                    .symbol("CLEAR_DAY_0", glyphs::CLEAR_DAY_0)
                    .symbol("CLEAR_DAY_1", glyphs::CLEAR_DAY_1)
                    .symbol("CLEAR_NIGHT", glyphs::CLEAR_NIGHT)
                    .symbol("PARTLY_DAY", glyphs::PARTLY_DAY)
                    .symbol("PARTLY_NIGHT", glyphs::PARTLY_NIGHT)
                    .symbol("CLOUDY", glyphs::CLOUDY)
                    .symbol("BLANK", glyphs::ICON_BLANK),
            ),
        );
        FontBook { fonts }
    }

    pub fn get(&self, id: FontId) -> &GlyphSource {
        // builtin() populates every variant
        &self.fonts[&id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_symbol_lookup() {
        let book = FontBook::builtin();
        let tiny = book.get(FontId::NumbersTiny);
        let found = resolve(&[Token::Digit(7), Token::Symbol("SEPARATOR")], tiny).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].width(), 3);
        assert_eq!(found[1].width(), 1);
    }

    #[test]
    fn unresolvable_token_names_itself() {
        let book = FontBook::builtin();
        let err = resolve(&[Token::Symbol("NO_SUCH")], book.get(FontId::NumbersTiny)).unwrap_err();
        match err {
            RenderError::Resolution { token, source } => {
                assert_eq!(token, Token::Symbol("NO_SUCH"));
                assert_eq!(source, "named catalog");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn indexed_source_rejects_symbols() {
        let frames = GlyphSource::Indexed(vec![Glyph::blank(2, 2)]);
        assert!(resolve(&[Token::Digit(0)], &frames).is_ok());
        assert!(resolve(&[Token::Symbol("BLANK")], &frames).is_err());
    }

    #[test]
    fn chain_commits_to_first_fully_resolving_source() {
        let book = FontBook::builtin();
        let tiny = book.get(FontId::NumbersTiny);
        let letters = book.get(FontId::LettersTiny);
        // Tiny digits can't resolve 'E'; letters resolve both tokens, so
        // the whole request comes from letters, not a partial mix.
        let tokens = [Token::Symbol("E"), Token::Symbol("R")];
        let found = resolve_chain(&tokens, &[tiny, letters]).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].bit(0, 0) && found[0].bit(2, 0));

        // Digits resolve in the first source and stay there
        let digits = [Token::Digit(1), Token::Digit(2)];
        assert!(resolve_chain(&digits, &[tiny, letters]).is_ok());

        // Exhausted chain propagates the failure
        let neither = [Token::Symbol("E"), Token::Digit(1)];
        assert!(resolve_chain(&neither, &[tiny, letters]).is_err());
    }
}
