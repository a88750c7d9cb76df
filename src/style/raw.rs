//! Caller-supplied raw style overrides.
//!
//! The raw override is the last, highest-precedence layer of the merge
//! pipeline. It arrives either as a ready [`StyleRecord`] or as CSS
//! declaration text (`"color: red; padding: 10px"`), which is lexed with
//! [`logos`] and converted declaration by declaration. A malformed
//! declaration is dropped (never an error) with a diagnostic in debug
//! builds; presentation must not hard-fail over a styling override.

use logos::Logos;

use crate::style::record::StyleRecord;

/// A raw style override supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RawStyle {
    /// A pre-built record, merged as-is.
    Record(StyleRecord),
    /// CSS declaration text, e.g. `"color: red; margin-top: 4px"`.
    Css(String),
}

/// Tokens of a CSS declaration value.
///
/// The lexer only needs to recognize enough shapes to tell well-formed values
/// from garbage; values are carried through as their original text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
enum Token {
    /// `!important` flag (accepted and ignored).
    #[token("!important")]
    Important,

    /// Hex color: `#fff`, `#ff00aa80`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Number with a unit suffix: `10px`, `50%`, `0.2s`, `45deg`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|%|vw|vh|em|rem|fr|s|ms|deg|turn)")]
    Dimension,

    /// Bare number.
    #[regex(r"-?(\.[0-9]+|[0-9]+(\.[0-9]+)?)")]
    Number,

    /// Identifier or function name: `red`, `ease-in-out`, `rgba`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// Function arguments: `(0, 0, 0, 0.2)`.
    #[regex(r"\([^()]*\)")]
    ParenGroup,

    /// Quoted string.
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    StringLiteral,

    #[token(",")]
    Comma,

    #[token("/")]
    Slash,
}

/// Resolve a raw override into its style contribution.
///
/// Never fails: an unparsable CSS override degrades to the declarations that
/// did parse (worst case, an empty record).
pub fn resolve_raw(raw: &RawStyle) -> StyleRecord {
    match raw {
        RawStyle::Record(record) => record.clone(),
        RawStyle::Css(text) => parse_declarations(text),
    }
}

/// Parse CSS declaration text into a flat record, dropping malformed
/// declarations.
pub fn parse_declarations(text: &str) -> StyleRecord {
    let mut record = StyleRecord::new();
    for declaration in text.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        match parse_declaration(declaration) {
            Some((property, value)) => {
                match value.parse::<f64>() {
                    Ok(number) => record.set_num(property, number),
                    Err(_) => record.set_str(property, value),
                }
            }
            None => {
                if cfg!(debug_assertions) {
                    tracing::warn!(
                        target: "lamina::raw",
                        declaration,
                        "dropping malformed style override declaration"
                    );
                }
            }
        }
    }
    record
}

/// Split one declaration into `(property, value)`, validating both sides with
/// the lexer. Returns `None` for anything malformed.
fn parse_declaration(declaration: &str) -> Option<(String, String)> {
    let (property, value) = declaration.split_once(':')?;
    let property = property.trim();
    let value = value.trim();

    // The property must be exactly one identifier token.
    let mut lexer = Token::lexer(property);
    match lexer.next() {
        Some(Ok(Token::Ident)) => {}
        _ => return None,
    }
    if lexer.next().is_some() {
        return None;
    }

    // The value must be non-empty and lex cleanly.
    if value.is_empty() {
        return None;
    }
    let mut tokens = Token::lexer(value);
    let mut any = false;
    for token in tokens.by_ref() {
        match token {
            Ok(_) => any = true,
            Err(()) => return None,
        }
    }
    if !any {
        return None;
    }

    // Strip a trailing !important; the override layer already wins.
    let value = value.trim_end_matches("!important").trim_end();
    Some((property.to_string(), value.to_string()))
}
