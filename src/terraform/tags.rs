use std::iter::Peekable;
use std::str::Chars;

/// Extracts the tag keys declared in the interior of a flat `tags = { ... }` map.
///
/// A key is an identifier (ASCII letter, then letters, digits, `_` or `-`),
/// optionally double-quoted, followed by a single `=`. Several entries may
/// share a line. Text inside string values and comments never yields a key.
/// Keys come back in order of appearance, duplicates included.
pub fn extract_tags(interior: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut candidate: Option<String> = None;
    // A key may only start after whitespace, `{`, `,`, `=`, a string or a comment.
    let mut at_boundary = true;
    let mut chars = interior.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => at_boundary = true,
            '{' | ',' => {
                candidate = None;
                at_boundary = true;
            }
            '=' => {
                if chars.peek() == Some(&'=') {
                    chars.next();
                } else if let Some(key) = candidate.take() {
                    tags.push(key);
                }
                candidate = None;
                at_boundary = true;
            }
            '"' => {
                let literal = read_string(&mut chars);
                candidate = (at_boundary && is_identifier(&literal)).then_some(literal);
                at_boundary = true;
            }
            '#' => {
                skip_line(&mut chars);
                at_boundary = true;
            }
            '/' if chars.peek() == Some(&'/') => {
                skip_line(&mut chars);
                at_boundary = true;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block_comment(&mut chars);
                at_boundary = true;
            }
            c if is_word_char(c) => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !is_word_char(next) {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                candidate = (at_boundary && is_identifier(&word)).then_some(word);
                at_boundary = false;
            }
            _ => {
                candidate = None;
                at_boundary = false;
            }
        }
    }

    tags
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic()) && chars.all(is_word_char)
}

// Consumes through the closing quote; an unterminated literal runs to the end.
fn read_string(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut literal = String::new();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => break,
            '\\' => {
                if let Some(escaped) = chars.next() {
                    literal.push('\\');
                    literal.push(escaped);
                }
            }
            other => literal.push(other),
        }
    }
    literal
}

fn skip_line(chars: &mut Peekable<Chars<'_>>) {
    for ch in chars.by_ref() {
        if ch == '\n' {
            break;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars<'_>>) {
    while let Some(ch) = chars.next() {
        if ch == '*' && chars.peek() == Some(&'/') {
            chars.next();
            break;
        }
    }
}
