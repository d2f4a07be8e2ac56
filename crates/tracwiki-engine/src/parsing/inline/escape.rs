use std::borrow::Cow;

use html_escape::decode_html_entities;

/// Longest entity reference we try to decode, `&` and `;` included.
const MAX_ENTITY_LEN: usize = 32;

pub fn is_escapable(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Resolves backslash escapes of ASCII punctuation and HTML entity
/// references, in one pass so that an escaped `\&` stays literal.
pub fn unescape_string(s: &str) -> String {
    if !s.contains(['\\', '&']) {
        return s.to_owned();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find(['\\', '&']) {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        if let Some(escaped) = tail.strip_prefix('\\') {
            match escaped.chars().next().filter(|c| is_escapable(*c)) {
                Some(c) => {
                    out.push(c);
                    rest = &escaped[c.len_utf8()..];
                }
                None => {
                    out.push('\\');
                    rest = escaped;
                }
            }
            continue;
        }
        match decode_entity(tail) {
            Some((decoded, len)) => {
                out.push_str(&decoded);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes the entity at the start of `s`, returning it and its byte length.
fn decode_entity(s: &str) -> Option<(String, usize)> {
    let end = s
        .char_indices()
        .take(MAX_ENTITY_LEN)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i + 1)?;
    let candidate = &s[..end];
    let name = &candidate[1..candidate.len() - 1];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '#') {
        return None;
    }
    match decode_html_entities(candidate) {
        Cow::Owned(decoded) if decoded != candidate => Some((decoded, end)),
        _ => None,
    }
}
