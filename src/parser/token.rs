//! Keyword-anchored token scanning shared by every extractor.
//!
//! Scanning is a single left-to-right pass per line with no backtracking, so
//! pathological lines cost time proportional to their length.

/// A keyword phrase: consecutive bare tokens compared case-insensitively.
pub type Phrase = &'static [&'static str];

/// Tokens that switch a setting on.
const TRUE_TOGGLES: &[&str] = &["enable", "enabled", "on", "yes", "true"];

/// Tokens that switch a setting off.
const FALSE_TOGGLES: &[&str] = &["disable", "disabled", "off", "no", "false"];

/// A single token of a configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text, without surrounding quotes
    pub text: &'a str,
    /// Whether the token came from a quoted string
    pub quoted: bool,
}

impl<'a> Token<'a> {
    fn bare(text: &'a str) -> Self {
        Self {
            text,
            quoted: false,
        }
    }

    fn quoted(text: &'a str) -> Self {
        Self { text, quoted: true }
    }

    /// Returns true for a bare token equal to `word`, ignoring ASCII case.
    pub fn is(&self, word: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(word)
    }

    /// Returns true for a bare token equal to any of `words`.
    pub fn is_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.is(w))
    }

    /// Reads the token as an on/off switch.
    pub fn toggle(&self) -> Option<bool> {
        if self.is_any(TRUE_TOGGLES) {
            Some(true)
        } else if self.is_any(FALSE_TOGGLES) {
            Some(false)
        } else {
            None
        }
    }
}

/// Splits a line into bare and quoted tokens.
///
/// A quote that never closes captures the rest of the line verbatim.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = line;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        if let Some(body) = rest.strip_prefix('"') {
            match body.find('"') {
                Some(end) => {
                    tokens.push(Token::quoted(&body[..end]));
                    rest = &body[end + 1..];
                }
                None => {
                    tokens.push(Token::quoted(body));
                    break;
                }
            }
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            tokens.push(Token::bare(&rest[..end]));
            rest = &rest[end..];
        }
    }
    tokens
}

/// A normalized line and its tokens.
#[derive(Debug, Clone)]
pub struct TokenLine<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenLine<'a> {
    /// Tokenizes one normalized line.
    pub fn new(line: &'a str) -> Self {
        Self {
            tokens: tokenize(line),
        }
    }

    /// The tokens of the line.
    #[cfg(test)]
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Index just past the first phrase of `phrases` found at `index`.
    ///
    /// Phrases are tried in order, so longer phrases should be listed first.
    pub fn phrase_at(&self, index: usize, phrases: &[Phrase]) -> Option<usize> {
        phrases.iter().find_map(|phrase| {
            let end = index + phrase.len();
            let window = self.tokens.get(index..end)?;
            window
                .iter()
                .zip(phrase.iter())
                .all(|(token, word)| token.is(word))
                .then_some(end)
        })
    }

    /// Index just past a phrase that opens the line.
    pub fn leading(&self, phrases: &[Phrase]) -> Option<usize> {
        self.phrase_at(0, phrases)
    }

    /// Indices just past every occurrence of any phrase, left to right.
    ///
    /// Occurrences covering an index in `skip` are ignored.
    pub fn occurrences(&self, phrases: &[Phrase], skip: &[usize]) -> std::vec::IntoIter<usize> {
        (0..self.tokens.len())
            .filter_map(|i| {
                let end = self.phrase_at(i, phrases)?;
                (!(i..end).any(|k| skip.contains(&k))).then_some(end)
            })
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Token at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Token<'a>> {
        self.tokens.get(index).copied()
    }

    /// A cursor positioned at `index`.
    pub fn cursor(&self, index: usize) -> Cursor<'_, 'a> {
        Cursor {
            tokens: &self.tokens,
            pos: index,
        }
    }
}

/// Forward-only reader over the tokens of one line.
#[derive(Debug)]
pub struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'a> Cursor<'_, 'a> {
    /// Index of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Next token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    /// Consumes and returns the next token.
    pub fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the next token if it is an on/off switch.
    pub fn toggle(&mut self) -> Option<bool> {
        let value = self.peek()?.toggle()?;
        self.pos += 1;
        Some(value)
    }

    /// Consumes the next token if it is the bare word `word`.
    pub fn eat(&mut self, word: &str) -> bool {
        let matched = self.peek().is_some_and(|t| t.is(word));
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Consumes a field value, skipping bare filler words that are followed
    /// by another token (`source address any` reads `any`).
    pub fn value(&mut self, fillers: &[&str]) -> Option<String> {
        while self.peek().is_some_and(|t| t.is_any(fillers))
            && self.tokens.get(self.pos + 1).is_some()
        {
            self.pos += 1;
        }
        self.bump().map(|t| t.text.to_string())
    }
}
