/// Returns the prefix of `text` up to and including the brace that closes the
/// first `{` it contains.
///
/// When the braces never balance the whole of `text` is returned; callers
/// judge malformed blocks by what they can (or cannot) find inside.
pub fn extract_block(text: &str) -> &str {
    let mut depth: isize = 0;
    let mut started = false;

    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => {
                started = true;
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 && started {
                    return &text[..idx + ch.len_utf8()];
                }
            }
            _ => {}
        }
    }

    text
}
