// Chunk: docs/chunks/grammar_registry - Grammar compilation and the process-wide registry

//! Language registry mapping identifiers and file names to grammars.
//!
//! The process-wide registry is built once, from the built-in grammars plus
//! any extra definitions passed to [`LanguageRegistry::init_global`], and is
//! read-only afterwards. Grammars are shared as `Arc<LanguageGrammar>`.

use std::sync::{Arc, OnceLock};

use crate::builtin;
use crate::error::{GrammarError, Result};
use crate::grammar::{GrammarDefinition, LanguageGrammar};

static GLOBAL: OnceLock<Arc<LanguageRegistry>> = OnceLock::new();

/// An ordered set of grammars with a plain text fallback.
#[derive(Debug)]
pub struct LanguageRegistry {
    /// Lookup order for file names; plain text is first.
    grammars: Vec<Arc<LanguageGrammar>>,
    plain_text: Arc<LanguageGrammar>,
}

impl LanguageRegistry {
    /// Creates a registry holding only the plain text grammar.
    pub fn empty() -> Self {
        let plain_text = Arc::new(LanguageGrammar::plain_text());
        Self {
            grammars: vec![plain_text.clone()],
            plain_text,
        }
    }

    /// Creates a registry with the built-in grammars followed by `extra`.
    pub fn new(extra: Vec<GrammarDefinition>) -> Result<Self> {
        let mut registry = Self::empty();
        for def in builtin::definitions().into_iter().chain(extra) {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Compiles and appends a grammar.
    fn register(&mut self, definition: GrammarDefinition) -> Result<()> {
        if self.by_identifier(&definition.identifier).is_some() {
            return Err(GrammarError::DuplicateIdentifier(definition.identifier));
        }
        let grammar = LanguageGrammar::compile(definition)?;
        self.grammars.push(Arc::new(grammar));
        Ok(())
    }

    /// Initializes the process-wide registry with extra grammars.
    ///
    /// Must be called before the first [`LanguageRegistry::global`] call,
    /// and at most once.
    pub fn init_global(extra: Vec<GrammarDefinition>) -> Result<Arc<LanguageRegistry>> {
        if GLOBAL.get().is_some() {
            return Err(GrammarError::RegistryInitialized);
        }
        let registry = Arc::new(Self::new(extra)?);
        GLOBAL
            .set(registry.clone())
            .map_err(|_| GrammarError::RegistryInitialized)?;
        log::debug!("language registry initialized with {} grammars", registry.len());
        Ok(registry)
    }

    /// Returns the process-wide registry, building it from the built-ins if
    /// it was not initialized explicitly.
    pub fn global() -> Arc<LanguageRegistry> {
        GLOBAL
            .get_or_init(|| {
                let registry = Self::new(Vec::new()).unwrap_or_else(|err| {
                    log::error!("built-in grammar failed to compile: {}", err);
                    Self::empty()
                });
                log::debug!("language registry initialized with {} grammars", registry.len());
                Arc::new(registry)
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Exact lookup by identifier.
    pub fn by_identifier(&self, identifier: &str) -> Option<Arc<LanguageGrammar>> {
        self.grammars
            .iter()
            .find(|g| g.identifier() == identifier)
            .cloned()
    }

    pub fn plain_text(&self) -> Arc<LanguageGrammar> {
        self.plain_text.clone()
    }

    /// Returns the first grammar whose file patterns match, or plain text.
    pub fn for_filename(&self, filename: &str) -> Arc<LanguageGrammar> {
        self.match_filename(filename).unwrap_or_else(|| {
            log::debug!("no grammar matches {:?}; using plain text", filename);
            self.plain_text()
        })
    }

    fn match_filename(&self, filename: &str) -> Option<Arc<LanguageGrammar>> {
        self.grammars
            .iter()
            .find(|g| g.matches_filename(filename))
            .cloned()
    }

    /// Resolves a grammar from a file name, then from the content's first
    /// line, then falls back to plain text.
    pub fn resolve(&self, filename: Option<&str>, first_line: Option<&str>) -> Arc<LanguageGrammar> {
        if let Some(grammar) = filename.and_then(|name| self.match_filename(name)) {
            return grammar;
        }
        if let Some(line) = first_line {
            if let Some(grammar) = self.grammars.iter().find(|g| g.matches_first_line(line)) {
                return grammar.clone();
            }
        }
        log::debug!(
            "no grammar for {:?}; using plain text",
            filename.unwrap_or("<untitled>")
        );
        self.plain_text()
    }

    /// Identifiers and display names in registry order, for a language menu.
    pub fn identifiers(&self) -> Vec<(String, String)> {
        self.grammars
            .iter()
            .map(|g| (g.identifier().to_string(), g.display_name().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{rule, PLAIN_TEXT};
    use dux_buffer::TokenCategory;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(Vec::new()).unwrap()
    }

    #[test]
    fn test_builtins_registered() {
        let registry = registry();
        let ids: Vec<String> = registry.identifiers().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![PLAIN_TEXT, "c", "javascript", "json", "python", "rust", "shell"]
        );
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_by_identifier_is_exact() {
        let registry = registry();
        assert!(registry.by_identifier("rust").is_some());
        assert!(registry.by_identifier("Rust").is_none());
        assert!(registry.by_identifier("rus").is_none());
    }

    #[test]
    fn test_for_filename() {
        let registry = registry();
        assert_eq!(registry.for_filename("src/lib.rs").identifier(), "rust");
        assert_eq!(registry.for_filename("/tmp/SCRIPT.PY").identifier(), "python");
        assert_eq!(registry.for_filename("config.json").identifier(), "json");
        assert_eq!(registry.for_filename("~/.bashrc").identifier(), "shell");
        assert_eq!(registry.for_filename("notes.txt").identifier(), PLAIN_TEXT);
    }

    #[test]
    fn test_unknown_filename_falls_back_to_plain_text() {
        let registry = registry();
        assert!(registry.for_filename("mystery.xyz").is_plain_text());
        assert!(registry.for_filename("").is_plain_text());
    }

    #[test]
    fn test_resolve_sniffs_first_line() {
        let registry = registry();
        let grammar = registry.resolve(Some("run"), Some("#!/usr/bin/env python3"));
        assert_eq!(grammar.identifier(), "python");
        let grammar = registry.resolve(None, Some("#!/bin/bash"));
        assert_eq!(grammar.identifier(), "shell");
        let grammar = registry.resolve(Some("x.rs"), Some("#!/bin/bash"));
        assert_eq!(grammar.identifier(), "rust");
        assert!(registry.resolve(None, None).is_plain_text());
    }

    #[test]
    fn test_extra_grammar_and_duplicates() {
        let extra = GrammarDefinition::new("ini", "INI")
            .files(&["*.ini"])
            .state("root", vec![rule(";.*", TokenCategory::Comment)]);
        let registry = LanguageRegistry::new(vec![extra]).unwrap();
        assert_eq!(registry.for_filename("setup.ini").identifier(), "ini");

        let dup = GrammarDefinition::new("rust", "Another Rust").state("root", Vec::new());
        let err = LanguageRegistry::new(vec![dup]).unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateIdentifier(ref id) if id == "rust"));
    }

    #[test]
    fn test_global_is_shared() {
        let a = LanguageRegistry::global();
        let b = LanguageRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(matches!(
            LanguageRegistry::init_global(Vec::new()),
            Err(GrammarError::RegistryInitialized)
        ));
    }
}
