//! Filesystem-safe names for sink files.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Makes `name` safe to use as a single path component on Linux.
///
/// Path separators, NUL, control characters and whitespace become `_`
/// (runs collapse to one), leading/trailing dots and underscores are trimmed,
/// and the result is cut to 255 bytes on a char boundary.
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let unsafe_char = matches!(c, '/' | '\\' | '\0') || c.is_control() || c.is_whitespace();
        if !unsafe_char {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
