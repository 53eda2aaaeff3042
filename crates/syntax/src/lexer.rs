// Chunk: docs/chunks/incremental_highlighting - Incremental regex-rule highlighting

//! Line-oriented lexer.
//!
//! A line (including its terminator) is scanned from the [`LexState`] in
//! effect at its start. At each position the rules of the state on top of
//! the stack are tried in order; the first non-empty match wins. Input no
//! rule recognizes advances by one grapheme cluster as
//! [`TokenCategory::Plain`]. Because a line's tokens depend only on its text
//! and its start state, the states recorded at line starts are safe points
//! to resume lexing from.

use dux_buffer::TokenCategory;
use unicode_segmentation::UnicodeSegmentation;

use crate::grammar::{LanguageGrammar, StateId, Transition};

/// Nesting limit for pushed states. A push at the limit replaces the top.
const MAX_STACK_DEPTH: usize = 32;

/// The lexer's state stack. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexState {
    stack: Vec<StateId>,
}

impl LexState {
    /// The state at the start of a document.
    pub fn initial() -> Self {
        Self { stack: vec![0] }
    }

    /// The state whose rules apply next.
    pub fn top(&self) -> StateId {
        self.stack.last().copied().unwrap_or(0)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(state) => {
                if self.stack.len() >= MAX_STACK_DEPTH {
                    self.stack.pop();
                }
                self.stack.push(state);
            }
            Transition::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Transition::Goto(state) => {
                self.stack.pop();
                self.stack.push(state);
            }
        }
    }
}

impl Default for LexState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A categorized span of a line, in chars relative to the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub category: TokenCategory,
}

/// Tokenizes one line, advancing `state` to the state at the next line start.
///
/// The returned tokens are contiguous and cover every char of `line`.
pub fn tokenize_line(grammar: &LanguageGrammar, line: &str, state: &mut LexState) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut byte = 0;
    let mut ch = 0;

    while byte < line.len() {
        let rest = &line[byte..];
        let hit = grammar.rules(state.top()).iter().find_map(|rule| {
            rule.pattern
                .match_len(line, byte)
                .filter(|&len| len > 0)
                .map(|len| (rule, len))
        });

        let (len, category) = match hit {
            Some((rule, len)) => {
                state.apply(rule.transition);
                (len, rule.category)
            }
            None => {
                let len = rest.graphemes(true).next().map_or(rest.len(), str::len);
                (len, TokenCategory::Plain)
            }
        };

        let chars = rest[..len].chars().count();
        match tokens.last_mut() {
            Some(last) if category == TokenCategory::Plain && last.category == TokenCategory::Plain => {
                last.end += chars;
            }
            _ => tokens.push(Token {
                start: ch,
                end: ch + chars,
                category,
            }),
        }
        byte += len;
        ch += chars;
    }

    tokens
}

/// Tokenizes a whole text from the initial state, returning per-line tokens
/// with absolute char offsets.
pub fn tokenize_all(grammar: &LanguageGrammar, lines: &[&str]) -> Vec<Token> {
    let mut state = LexState::initial();
    let mut offset = 0;
    let mut out = Vec::new();
    for line in lines {
        out.extend(tokenize_line(grammar, line, &mut state).into_iter().map(|t| Token {
            start: t.start + offset,
            end: t.end + offset,
            category: t.category,
        }));
        offset += line.chars().count();
    }
    out
}
