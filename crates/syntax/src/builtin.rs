// Chunk: docs/chunks/grammar_registry - Built-in language grammars

//! Grammar definitions shipped with the engine.
//!
//! Patterns avoid look-around (the regex crate has none), so keyword rules
//! come before the identifier rule and end in `\b`.

use dux_buffer::TokenCategory::*;

use crate::grammar::{rule, GrammarDefinition, RuleDefinition};

/// All built-in definitions except plain text, in registry order.
pub fn definitions() -> Vec<GrammarDefinition> {
    vec![c(), javascript(), json(), python(), rust(), shell()]
}

const C_NUMBER: &str = r"(?:0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?)[uUlLfF]*";
const OPERATOR: &str = r"[-+*/%=<>!&|^~?:]";
const PUNCTUATION: &str = r"[{}()\[\];,.]";
const WHITESPACE: &str = r"\s+";

/// A double-quoted string state: escapes, then the closing quote.
fn dquote_string() -> Vec<RuleDefinition> {
    vec![
        rule(r"\\(?s:.)", Escape),
        rule(r#"""#, String).pop(),
        rule(r#"[^"\\]+"#, String),
    ]
}

/// A `/* ... */` comment state. With `nested`, an inner `/*` pushes again.
fn block_comment(nested: bool) -> Vec<RuleDefinition> {
    let mut rules = Vec::new();
    if nested {
        rules.push(rule(r"/\*", Comment).push("block-comment"));
    }
    rules.push(rule(r"\*/", Comment).pop());
    rules.push(rule(r"[^*/]+", Comment));
    rules.push(rule(r"[*/]", Comment));
    rules
}

pub fn c() -> GrammarDefinition {
    GrammarDefinition::new("c", "C")
        .files(&["*.c", "*.h"])
        .state(
            "code",
            vec![
                rule(r"/\*", Comment).push("block-comment"),
                rule(r"//.*", Comment),
                rule(r"#[ \t]*[A-Za-z_]+", Preprocessor),
                rule(r"<[A-Za-z0-9_./]+>", String),
                rule(r#"""#, String).push("string"),
                rule(r"'(?:[^'\\\r\n]|\\.)*'?", String),
                rule(
                    r"(?:auto|break|case|const|continue|default|do|else|enum|extern|for|goto|if|inline|register|restrict|return|sizeof|static|struct|switch|typedef|union|volatile|while)\b",
                    Keyword,
                ),
                rule(
                    r"(?:bool|char|double|float|int|long|short|signed|unsigned|void|[A-Za-z_][A-Za-z0-9_]*_t)\b",
                    Type,
                ),
                rule(r"(?:NULL|true|false)\b", Constant),
                rule(r"[A-Za-z_][A-Za-z0-9_]*", Variable),
                rule(C_NUMBER, Number),
                rule(OPERATOR, Operator),
                rule(PUNCTUATION, Punctuation),
                rule(WHITESPACE, Plain),
            ],
        )
        .state("block-comment", block_comment(false))
        .state(
            "string",
            vec![
                rule(r"\\(?s:.)", Escape),
                rule(r#"""#, String).pop(),
                rule(r"\r\n|\r|\n", String).pop(),
                rule(r#"[^"\\\r\n]+"#, String),
            ],
        )
}

pub fn javascript() -> GrammarDefinition {
    GrammarDefinition::new("javascript", "JavaScript")
        .files(&["*.js", "*.mjs", "*.cjs", "*.jsx"])
        .first_line(r"^#!.*\bnode\b")
        .state(
            "code",
            vec![
                rule(r"/\*", Comment).push("block-comment"),
                rule(r"//.*", Comment),
                rule(r#""(?:[^"\\\r\n]|\\.)*"?"#, String),
                rule(r"'(?:[^'\\\r\n]|\\.)*'?", String),
                rule(r"`", String).push("template"),
                rule(
                    r"(?:async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|if|import|in|instanceof|let|new|of|return|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b",
                    Keyword,
                ),
                rule(r"(?:true|false|null|undefined|NaN|Infinity)\b", Constant),
                rule(r"[A-Z][A-Za-z0-9_$]*", Type),
                rule(r"[A-Za-z_$][A-Za-z0-9_$]*", Variable),
                rule(
                    r"(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9]+)?)n?",
                    Number,
                ),
                rule(r"=>|[-+*/%=<>!&|^~?:]", Operator),
                rule(PUNCTUATION, Punctuation),
                rule(WHITESPACE, Plain),
            ],
        )
        .state("block-comment", block_comment(false))
        .state(
            "template",
            vec![
                rule(r"\\(?s:.)", Escape),
                rule(r"\$\{[^}`\r\n]*\}", Variable),
                rule(r"`", String).pop(),
                rule(r"[^`\\$]+|\$", String),
            ],
        )
}

pub fn json() -> GrammarDefinition {
    GrammarDefinition::new("json", "JSON")
        .files(&["*.json", "*.jsonc", "*.geojson", ".babelrc", ".eslintrc"])
        .state(
            "value",
            vec![
                rule(r#""(?:[^"\\\r\n]|\\.)*"[ \t]*:"#, Attribute),
                rule(r#""(?:[^"\\\r\n]|\\.)*"?"#, String),
                rule(r"-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?", Number),
                rule(r"(?:true|false|null)\b", Constant),
                rule(r"//.*", Comment),
                rule(r"[{}\[\],:]", Punctuation),
                rule(WHITESPACE, Plain),
            ],
        )
}

pub fn python() -> GrammarDefinition {
    GrammarDefinition::new("python", "Python")
        .files(&["*.py", "*.pyw", "*.pyi", "SConstruct", "SConscript"])
        .first_line(r"^#!.*\bpython[0-9.]*\b")
        .state(
            "code",
            vec![
                rule(r"#.*", Comment),
                rule(r#"[rRbBuUfF]{0,2}""""#, String).push("triple-double"),
                rule(r"[rRbBuUfF]{0,2}'''", String).push("triple-single"),
                rule(r#"[rRbBuUfF]{0,2}"(?:[^"\\\r\n]|\\.)*"?"#, String),
                rule(r"[rRbBuUfF]{0,2}'(?:[^'\\\r\n]|\\.)*'?", String),
                rule(r"@[A-Za-z_][A-Za-z0-9_.]*", Attribute),
                rule(
                    r"(?:and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|match|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
                    Keyword,
                ),
                rule(r"(?:True|False|None|self|cls)\b", Constant),
                rule(
                    r"(?:int|str|float|bool|list|dict|set|tuple|bytes|object|type)\b",
                    Type,
                ),
                rule(
                    r"(?:print|len|range|open|isinstance|super|enumerate|zip|map|filter|sorted)\b",
                    Function,
                ),
                rule(r"[A-Za-z_][A-Za-z0-9_]*", Variable),
                rule(
                    r"(?:0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9]+)?)[jJ]?",
                    Number,
                ),
                rule(r"->|[-+*/%=<>!&|^~@:]", Operator),
                rule(PUNCTUATION, Punctuation),
                rule(WHITESPACE, Plain),
            ],
        )
        .state(
            "triple-double",
            vec![
                rule(r"\\(?s:.)", Escape),
                rule(r#"""""#, String).pop(),
                rule(r#"[^"\\]+|""#, String),
            ],
        )
        .state(
            "triple-single",
            vec![
                rule(r"\\(?s:.)", Escape),
                rule(r"'''", String).pop(),
                rule(r"[^'\\]+|'", String),
            ],
        )
}

pub fn rust() -> GrammarDefinition {
    GrammarDefinition::new("rust", "Rust")
        .files(&["*.rs"])
        .state(
            "code",
            vec![
                rule(r"//.*", Comment),
                rule(r"/\*", Comment).push("block-comment"),
                rule(r##"b?r#*"[^"]*"#*"##, String),
                rule(r#"b?""#, String).push("string"),
                rule(r"b?'(?:[^'\\\r\n]|\\[^\r\n][^'\r\n]*)'", String),
                rule(r"'[A-Za-z_][A-Za-z0-9_]*", Constant),
                rule(r"#!?\[[^\]\r\n]*\]?", Attribute),
                rule(
                    r"(?:as|async|await|break|const|continue|crate|dyn|else|enum|extern|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|static|struct|super|trait|type|unsafe|use|where|while)\b",
                    Keyword,
                ),
                rule(r"(?:true|false|self)\b", Constant),
                rule(
                    r"(?:Self|bool|char|str|[iu](?:8|16|32|64|128|size)|f32|f64|[A-Z][A-Za-z0-9_]*)\b",
                    Type,
                ),
                rule(r"[A-Za-z_][A-Za-z0-9_]*!", Function),
                rule(r"[A-Za-z_][A-Za-z0-9_]*", Variable),
                rule(
                    r"(?:0x[0-9a-fA-F_]+|0o[0-7_]+|0b[01_]+|[0-9][0-9_]*(?:\.[0-9][0-9_]*)?(?:[eE][+-]?[0-9]+)?)(?:[iu](?:8|16|32|64|128|size)|f32|f64)?",
                    Number,
                ),
                rule(r"->|=>|::|[-+*/%=<>!&|^~?:]", Operator),
                rule(PUNCTUATION, Punctuation),
                rule(WHITESPACE, Plain),
            ],
        )
        .state("block-comment", block_comment(true))
        .state("string", dquote_string())
}

pub fn shell() -> GrammarDefinition {
    GrammarDefinition::new("shell", "Shell Script")
        .files(&[
            "*.sh",
            "*.bash",
            "*.zsh",
            ".bashrc",
            ".bash_profile",
            ".profile",
            ".zshrc",
        ])
        .first_line(r"^#!.*\b(?:ba|z|k|da)?sh\b")
        .state(
            "code",
            vec![
                rule(r"\$\{[^}\r\n]*\}?", Variable),
                rule(r"\$(?:[A-Za-z_][A-Za-z0-9_]*|[0-9#?@*$!-])", Variable),
                rule(r"#.*", Comment),
                rule(r#"""#, String).push("string"),
                rule(r"'", String).push("literal"),
                rule(
                    r"(?:if|then|else|elif|fi|for|while|until|do|done|case|esac|in|function|return|local|export|readonly|select|time)\b",
                    Keyword,
                ),
                rule(
                    r"(?:echo|cd|exit|set|unset|source|read|shift|test|printf|eval|exec|trap)\b",
                    Function,
                ),
                rule(r"[0-9]+\b", Number),
                rule(r"[A-Za-z_][A-Za-z0-9_.-]*", Plain),
                rule(r"[|&;<>()=!]", Operator),
                rule(r"[{}\[\]]", Punctuation),
                rule(WHITESPACE, Plain),
            ],
        )
        .state(
            "string",
            vec![
                rule(r"\\(?s:.)", Escape),
                rule(r"\$\{[^}\r\n]*\}?|\$[A-Za-z_][A-Za-z0-9_]*", Variable),
                rule(r#"""#, String).pop(),
                rule(r#"[^"\\$]+|\$"#, String),
            ],
        )
        .state(
            "literal",
            vec![rule(r"'", String).pop(), rule(r"[^']+", String)],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::LanguageGrammar;
    use crate::lexer::{tokenize_line, LexState};
    use dux_buffer::TokenCategory;

    fn compiled(def: GrammarDefinition) -> LanguageGrammar {
        LanguageGrammar::compile(def).unwrap()
    }

    /// Categories of each token's text on a single line.
    fn lex(grammar: &LanguageGrammar, line: &str) -> Vec<(std::string::String, TokenCategory)> {
        let mut state = LexState::initial();
        let chars: Vec<char> = line.chars().collect();
        tokenize_line(grammar, line, &mut state)
            .into_iter()
            .map(|t| (chars[t.start..t.end].iter().collect(), t.category))
            .collect()
    }

    fn category_of(tokens: &[(std::string::String, TokenCategory)], text: &str) -> Option<TokenCategory> {
        tokens.iter().find(|(t, _)| t == text).map(|(_, c)| *c)
    }

    #[test]
    fn test_all_builtins_compile() {
        for def in definitions() {
            let id = def.identifier.clone();
            assert!(LanguageGrammar::compile(def).is_ok(), "{} failed to compile", id);
        }
    }

    #[test]
    fn test_rust_line() {
        let g = compiled(rust());
        let tokens = lex(&g, "pub fn main() -> u32 { println!(\"hi\\n\"); 42u32 }");
        assert_eq!(category_of(&tokens, "pub"), Some(Keyword));
        assert_eq!(category_of(&tokens, "main"), Some(Variable));
        assert_eq!(category_of(&tokens, "u32"), Some(Type));
        assert_eq!(category_of(&tokens, "println!"), Some(Function));
        assert_eq!(category_of(&tokens, "\\n"), Some(Escape));
        assert_eq!(category_of(&tokens, "42u32"), Some(Number));
        assert_eq!(category_of(&tokens, "->"), Some(Operator));
    }

    #[test]
    fn test_rust_nested_block_comment() {
        let g = compiled(rust());
        let mut state = LexState::initial();
        tokenize_line(&g, "/* outer /* inner */ still\n", &mut state);
        assert_eq!(state.depth(), 2);
        tokenize_line(&g, "*/ let", &mut state);
        assert_eq!(state, LexState::initial());
    }

    #[test]
    fn test_rust_lifetime_is_not_a_char() {
        let g = compiled(rust());
        let tokens = lex(&g, "fn f<'a>(x: &'a str, c: char) { 'x' }");
        assert_eq!(category_of(&tokens, "'a"), Some(Constant));
        assert_eq!(category_of(&tokens, "'x'"), Some(String));
    }

    #[test]
    fn test_c_string_ends_at_line_end() {
        let g = compiled(c());
        let mut state = LexState::initial();
        tokenize_line(&g, "char *s = \"unterminated\n", &mut state);
        assert_eq!(state, LexState::initial());
        let tokens = lex(&g, "#include <stdio.h>");
        assert_eq!(category_of(&tokens, "#include"), Some(Preprocessor));
        assert_eq!(category_of(&tokens, "<stdio.h>"), Some(String));
    }

    #[test]
    fn test_python_triple_quoted_string_spans_lines() {
        let g = compiled(python());
        let mut state = LexState::initial();
        tokenize_line(&g, "doc = \"\"\"start\n", &mut state);
        assert_eq!(state.depth(), 2);
        tokenize_line(&g, "end\"\"\" # done\n", &mut state);
        assert_eq!(state, LexState::initial());

        let tokens = lex(&g, "@dataclass");
        assert_eq!(category_of(&tokens, "@dataclass"), Some(Attribute));
    }

    #[test]
    fn test_json_keys_and_values() {
        let g = compiled(json());
        let tokens = lex(&g, r#"{"name": "dux", "n": -1.5e3, "ok": true}"#);
        assert_eq!(category_of(&tokens, "\"name\":"), Some(Attribute));
        assert_eq!(category_of(&tokens, "\"dux\""), Some(String));
        assert_eq!(category_of(&tokens, "-1.5e3"), Some(Number));
        assert_eq!(category_of(&tokens, "true"), Some(Constant));
    }

    #[test]
    fn test_javascript_template_literal() {
        let g = compiled(javascript());
        let tokens = lex(&g, "const s = `a ${b} c`;");
        assert_eq!(category_of(&tokens, "const"), Some(Keyword));
        assert_eq!(category_of(&tokens, "${b}"), Some(Variable));
        assert_eq!(category_of(&tokens, ";"), Some(Punctuation));
    }

    #[test]
    fn test_shell_variables_and_comments() {
        let g = compiled(shell());
        let tokens = lex(&g, "echo \"$HOME\" $# # note");
        assert_eq!(category_of(&tokens, "echo"), Some(Function));
        assert_eq!(category_of(&tokens, "$HOME"), Some(Variable));
        assert_eq!(category_of(&tokens, "$#"), Some(Variable));
        assert_eq!(category_of(&tokens, "# note"), Some(Comment));
    }
}
