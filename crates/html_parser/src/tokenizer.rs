//! HTML tokenizer.

/// A lexical token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Character data between tags.
    Text(String),
    /// Raw tag contents, verbatim, without the angle brackets.
    Tag(String),
}

/// Tokenize raw markup into an ordered token stream.
///
/// Single pass tracking an inside-tag flag and an accumulation buffer:
/// `<` flushes any pending text and enters tag state, `>` emits the buffer
/// as a tag and leaves it. No entity decoding, no raw-text special cases
/// (script and style contents tokenize like anything else). Never emits an
/// empty `Text` token, and never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut in_tag = false;

    for ch in input.chars() {
        match ch {
            '<' => {
                if !buffer.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut buffer)));
                }
                in_tag = true;
            }
            '>' => {
                tokens.push(Token::Tag(std::mem::take(&mut buffer)));
                in_tag = false;
            }
            _ => buffer.push(ch),
        }
    }

    // Trailing text outside a tag is kept; an unterminated tag is dropped.
    if !in_tag && !buffer.is_empty() {
        tokens.push(Token::Text(buffer));
    }

    tokens
}
