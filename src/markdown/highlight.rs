//! Syntax highlighting for fenced code blocks, backed by syntect.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

// two-face adds TypeScript/TSX, Kotlin, TOML and friends to syntect's defaults.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(two_face::syntax::extra_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

/// Foreground used when the theme cannot style a line.
pub const PLAIN_COLOR: [u8; 3] = [212, 212, 212];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenStyle {
    pub color: [u8; 3],
    pub bold: bool,
    pub italic: bool,
}

impl TokenStyle {
    pub const PLAIN: TokenStyle = TokenStyle {
        color: PLAIN_COLOR,
        bold: false,
        italic: false,
    };
}

impl From<Style> for TokenStyle {
    fn from(style: Style) -> Self {
        let fg = style.foreground;
        Self {
            color: [fg.r, fg.g, fg.b],
            bold: style.font_style.contains(FontStyle::BOLD),
            italic: style.font_style.contains(FontStyle::ITALIC),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub style: TokenStyle,
    pub text: String,
}

fn push_token(tokens: &mut Vec<Token>, style: TokenStyle, text: &str) {
    if text.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => tokens.push(Token {
            style,
            text: text.to_string(),
        }),
    }
}

/// Split `code` into styled tokens. Unknown languages are highlighted as
/// plain text. Concatenating the token texts gives back `code` unchanged.
pub fn highlight(code: &str, language: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let Some(theme) = THEME_SET.themes.get(THEME) else {
        log::warn!("Highlight theme {THEME} is missing");
        push_token(&mut tokens, TokenStyle::PLAIN, code);
        return tokens;
    };

    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let mut highlighter = HighlightLines::new(syntax, theme);

    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => {
                for (style, text) in ranges {
                    push_token(&mut tokens, style.into(), text);
                }
            }
            Err(err) => {
                log::debug!("Highlighting {language} failed, line kept plain: {err}");
                push_token(&mut tokens, TokenStyle::PLAIN, line);
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn joined(tokens: &[Token]) -> String {
        tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Style of the token covering byte `offset` of the highlighted text.
    fn style_at(tokens: &[Token], offset: usize) -> TokenStyle {
        let mut start = 0;
        for token in tokens {
            let end = start + token.text.len();
            if (start..end).contains(&offset) {
                return token.style;
            }
            start = end;
        }
        panic!("offset {offset} is past the end of the tokens");
    }

    fn nth_offset(code: &str, needle: &str, nth: usize) -> usize {
        code.match_indices(needle)
            .nth(nth)
            .map(|(index, _)| index)
            .unwrap()
    }

    #[test]
    fn keywords_after_a_regex_literal_keep_their_style() {
        let code = "const re = /\"/; const s = 1; let t = \"x\";";
        let tokens = highlight(code, "javascript");
        assert_eq!(joined(&tokens), code);

        let keyword = style_at(&tokens, nth_offset(code, "const", 0));
        assert_eq!(style_at(&tokens, nth_offset(code, "const", 1)), keyword);
        assert_eq!(style_at(&tokens, nth_offset(code, "let", 0)), keyword);
        assert_ne!(style_at(&tokens, nth_offset(code, "x\"", 0)), keyword);
    }

    #[test]
    fn python_keywords_and_comments_differ() {
        let code = "def f(n):\n    # note\n    return n\n";
        let tokens = highlight(code, "python");
        assert_eq!(joined(&tokens), code);
        let keyword = style_at(&tokens, nth_offset(code, "def", 0));
        assert_eq!(style_at(&tokens, nth_offset(code, "return", 0)), keyword);
        assert_ne!(style_at(&tokens, nth_offset(code, "# note", 0)), keyword);
    }

    #[test]
    fn tsx_gets_more_than_one_style() {
        let code = "const n: number = 1;";
        let tokens = highlight(code, "tsx");
        assert_eq!(joined(&tokens), code);
        assert!(tokens.len() > 1);
    }

    #[test]
    fn unknown_language_is_one_plain_run() {
        let tokens = highlight("if x then 42", "cobol-ish");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "if x then 42");
    }

    #[test]
    fn tokens_reassemble_every_canned_code_block() {
        let text = crate::chat::responses::DEFAULT_RESPONSES.join("\n\n");
        for block in crate::markdown::render(&text) {
            if let crate::markdown::Block::Code(code) = block {
                let language = code.language.unwrap_or_default();
                assert_eq!(joined(&highlight(&code.code, &language)), code.code);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn tokens_always_reassemble_the_input(
            code in "[\\s\\S]{0,160}",
            language in prop::sample::select(vec![
                "python", "javascript", "tsx", "rust", "go", "json", "bash", "cobol", "",
            ]),
        ) {
            prop_assert_eq!(joined(&highlight(&code, language)), code);
        }
    }
}
