/// Normalize a raw table header label into a canonical field key:
/// lowercase, whitespace runs collapsed to a single underscore, every
/// character outside `[a-z0-9_]` stripped.
///
/// Total function; empty input yields an empty string.
pub fn normalize_field(label: &str) -> String {
    sanitize(&label.trim().to_lowercase())
}

/// Slug a section heading into a table key. Same rules as
/// [`normalize_field`], except the word "table" is removed first
/// (case-insensitively, first occurrence only).
pub fn slug_table_key(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = match lowered.find("table") {
        Some(idx) => format!("{}{}", &lowered[..idx], &lowered[idx + "table".len()..]),
        None => lowered,
    };
    sanitize(stripped.trim())
}

fn sanitize(lowered: &str) -> String {
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                out.push(c);
            }
        }
    }

    out
}
