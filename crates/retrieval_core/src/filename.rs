use sha2::{Digest, Sha256};

const MAX_COMPONENT_LEN: usize = 120;

/// Deterministic base filename (no extension): `{sanitized_title}_{identity}`.
///
/// The identity is appended so that same-titled items from different categories
/// or products do not overwrite each other.
pub fn derive_file_stem(title: &str, identity: Option<&str>) -> String {
    let base = sanitize_component(title);
    match identity.map(sanitize_component) {
        Some(id) if id != UNTITLED => format!("{base}_{id}"),
        _ => base,
    }
}

const UNTITLED: &str = "untitled";

/// Make a single path component safe: path-hostile characters and spaces become `_`.
pub fn sanitize_component(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    // Leading/trailing dots would produce hidden files or `..` components.
    let mut name = cleaned.trim_matches('.').to_string();
    if name.is_empty() {
        name = UNTITLED.to_string();
    }
    if name.len() > MAX_COMPONENT_LEN {
        let mut end = MAX_COMPONENT_LEN;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    if is_reserved_windows_name(&name) {
        name.push('_');
    }
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' | '(' | ')' | '+' | '[' | ']'
        | '{' | '}' | ' ' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

/// First four bytes of the SHA-256 of `input`, hex encoded.
pub fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
