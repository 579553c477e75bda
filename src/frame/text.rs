/// Advance of one monospace glyph, as a fraction of the font size.
pub const MONO_ADVANCE: f64 = 0.6;

/// Estimated rendered width of `text` in a monospace face at `size`.
pub fn mono_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * MONO_ADVANCE
}

/// Greedy word wrap to lines of at most `max_chars` characters.
///
/// Words longer than a line are kept whole on their own line.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let n = word.chars().count();
        if line_len > 0 && line_len + 1 + n > max_chars {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += n;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
