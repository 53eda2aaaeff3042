// Chunk: docs/chunks/grammar_registry - Grammar compilation and the process-wide registry

//! Language grammars: ordered, first-match-wins regex rules grouped into
//! lexer states.
//!
//! A [`GrammarDefinition`] is plain data (buildable in code or deserialized
//! from configuration). [`LanguageGrammar::compile`] validates it once and
//! produces the immutable form the lexer runs. Every pattern is anchored at
//! the scan position, so a rule either matches the text right at the cursor
//! or not at all.

use std::path::Path;

use dux_buffer::TokenCategory;
use regex::{Regex, RegexBuilder};
use regex_automata::{meta, Anchored, Input};
use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, Result};

/// What a matching rule does to the lexer's state stack.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Stay in the current state.
    #[default]
    None,
    /// Enter the named state; a later `Pop` returns here.
    Push(String),
    /// Return to the state below the current one. Popping the initial
    /// state leaves it in place.
    Pop,
    /// Replace the current state with the named state.
    Goto(String),
}

/// A single pattern → category rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub pattern: String,
    pub category: TokenCategory,
    #[serde(default)]
    pub action: RuleAction,
}

impl RuleDefinition {
    pub fn new(pattern: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            pattern: pattern.into(),
            category,
            action: RuleAction::None,
        }
    }

    pub fn push(mut self, state: impl Into<String>) -> Self {
        self.action = RuleAction::Push(state.into());
        self
    }

    pub fn pop(mut self) -> Self {
        self.action = RuleAction::Pop;
        self
    }

    pub fn goto(mut self, state: impl Into<String>) -> Self {
        self.action = RuleAction::Goto(state.into());
        self
    }
}

/// Shorthand for [`RuleDefinition::new`].
pub fn rule(pattern: impl Into<String>, category: TokenCategory) -> RuleDefinition {
    RuleDefinition::new(pattern, category)
}

/// A named lexer state and its rules, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// The serializable description of a language.
///
/// The first state is the initial state; its rules are the grammar's token
/// rules for ordinary code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GrammarDefinition {
    /// Stable identifier, e.g. `"rust"`.
    pub identifier: String,
    /// Name shown in a language menu, e.g. `"Rust"`.
    pub display_name: String,
    /// File name globs such as `*.rs` or `Makefile`.
    #[serde(default)]
    pub file_patterns: Vec<String>,
    /// Regex tried against the first line when no file pattern matches.
    #[serde(default)]
    pub first_line: Option<String>,
    #[serde(default)]
    pub states: Vec<StateDefinition>,
}

impl GrammarDefinition {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            file_patterns: Vec::new(),
            first_line: None,
            states: Vec::new(),
        }
    }

    pub fn files(mut self, patterns: &[&str]) -> Self {
        self.file_patterns
            .extend(patterns.iter().map(|p| p.to_string()));
        self
    }

    pub fn first_line(mut self, pattern: impl Into<String>) -> Self {
        self.first_line = Some(pattern.into());
        self
    }

    pub fn state(mut self, name: impl Into<String>, rules: Vec<RuleDefinition>) -> Self {
        self.states.push(StateDefinition {
            name: name.into(),
            rules,
        });
        self
    }
}

/// Index of a state within its grammar.
pub type StateId = usize;

/// A rule's effect on the state stack, with state names resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Stay,
    Push(StateId),
    Pop,
    Goto(StateId),
}

/// A rule pattern tried at one position of a line.
///
/// The whole line is the haystack, so `^` only matches at the line start and
/// `\b` sees the character before the position.
#[derive(Debug)]
pub(crate) struct RulePattern {
    regex: meta::Regex,
}

impl RulePattern {
    fn new(pattern: &str) -> std::result::Result<Self, meta::BuildError> {
        Ok(Self {
            regex: meta::Regex::new(pattern)?,
        })
    }

    /// Byte length of the match starting exactly at `at`, if any.
    pub(crate) fn match_len(&self, line: &str, at: usize) -> Option<usize> {
        let input = Input::new(line).span(at..line.len()).anchored(Anchored::Yes);
        self.regex.find(input).map(|m| m.end() - at)
    }
}

#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub(crate) pattern: RulePattern,
    pub(crate) category: TokenCategory,
    pub(crate) transition: Transition,
}

#[derive(Debug)]
struct CompiledState {
    name: String,
    rules: Vec<CompiledRule>,
}

/// A compiled, immutable grammar.
#[derive(Debug)]
pub struct LanguageGrammar {
    definition: GrammarDefinition,
    file_patterns: Vec<Regex>,
    first_line: Option<Regex>,
    states: Vec<CompiledState>,
}

impl LanguageGrammar {
    /// Validates and compiles a definition.
    pub fn compile(definition: GrammarDefinition) -> Result<Self> {
        let grammar = definition.identifier.clone();
        if definition.states.is_empty() {
            return Err(GrammarError::NoStates { grammar });
        }

        let resolve = |state: &str| -> Result<StateId> {
            definition
                .states
                .iter()
                .position(|s| s.name == state)
                .ok_or_else(|| GrammarError::UnknownState {
                    grammar: grammar.clone(),
                    state: state.to_string(),
                })
        };

        let mut states = Vec::with_capacity(definition.states.len());
        for state in &definition.states {
            let mut rules = Vec::with_capacity(state.rules.len());
            for rule in &state.rules {
                let pattern = RulePattern::new(&rule.pattern).map_err(|source| {
                    GrammarError::InvalidPattern {
                        grammar: grammar.clone(),
                        state: state.name.clone(),
                        pattern: rule.pattern.clone(),
                        source: Box::new(source),
                    }
                })?;
                let transition = match &rule.action {
                    RuleAction::None => Transition::Stay,
                    RuleAction::Push(target) => Transition::Push(resolve(target)?),
                    RuleAction::Pop => Transition::Pop,
                    RuleAction::Goto(target) => Transition::Goto(resolve(target)?),
                };
                rules.push(CompiledRule {
                    pattern,
                    category: rule.category,
                    transition,
                });
            }
            states.push(CompiledState {
                name: state.name.clone(),
                rules,
            });
        }

        let file_patterns = definition
            .file_patterns
            .iter()
            .map(|glob| {
                glob_to_regex(glob).map_err(|source| GrammarError::InvalidPattern {
                    grammar: grammar.clone(),
                    state: "file-patterns".to_string(),
                    pattern: glob.clone(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let first_line = definition
            .first_line
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| GrammarError::InvalidPattern {
                    grammar: grammar.clone(),
                    state: "first-line".to_string(),
                    pattern: pattern.to_string(),
                    source: Box::new(source),
                })
            })
            .transpose()?;

        Ok(Self {
            definition,
            file_patterns,
            first_line,
            states,
        })
    }

    /// The grammar with no rules, used when no language matches.
    pub fn plain_text() -> Self {
        let definition = GrammarDefinition::new(PLAIN_TEXT, "Plain Text")
            .files(&["*.txt", "*.text"])
            .state("text", Vec::new());
        let file_patterns = definition
            .file_patterns
            .iter()
            .filter_map(|glob| glob_to_regex(glob).ok())
            .collect();
        Self {
            definition,
            file_patterns,
            first_line: None,
            states: vec![CompiledState {
                name: "text".to_string(),
                rules: Vec::new(),
            }],
        }
    }

    pub fn identifier(&self) -> &str {
        &self.definition.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.definition.display_name
    }

    pub fn definition(&self) -> &GrammarDefinition {
        &self.definition
    }

    pub fn is_plain_text(&self) -> bool {
        self.identifier() == PLAIN_TEXT
    }

    /// The ordered (pattern, category) rules of the initial state.
    pub fn token_rules(&self) -> impl Iterator<Item = (&str, TokenCategory)> {
        self.definition
            .states
            .first()
            .into_iter()
            .flat_map(|state| state.rules.iter())
            .map(|rule| (rule.pattern.as_str(), rule.category))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.states.get(id).map(|s| s.name.as_str())
    }

    pub(crate) fn rules(&self, id: StateId) -> &[CompiledRule] {
        self.states.get(id).map_or(&[], |s| s.rules.as_slice())
    }

    /// Returns true if a file pattern matches the file name component of `path`.
    pub fn matches_filename(&self, path: &str) -> bool {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path);
        self.file_patterns.iter().any(|re| re.is_match(name))
    }

    /// Returns true if the first-line pattern matches `line`.
    pub fn matches_first_line(&self, line: &str) -> bool {
        self.first_line.as_ref().is_some_and(|re| re.is_match(line))
    }
}

/// Identifier of the built-in plain text grammar.
pub const PLAIN_TEXT: &str = "plain-text";

/// Converts a file name glob (`*` and `?` wildcards) to a case-insensitive regex.
fn glob_to_regex(glob: &str) -> std::result::Result<Regex, regex::Error> {
    let mut pattern = String::with_capacity(glob.len() + 8);
    pattern.push('^');
    for ch in glob.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            other => pattern.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}
