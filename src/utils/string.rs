use super::dom::{text_content, Body};

/// Decode HTML character references, named (with or without the trailing
/// `;` where HTML allows it) and numeric alike. Markup is left as text.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    match Body::parse_fragment(&text.replace('<', "&lt;")) {
        Some(body) => text_content(body.root()),
        None => text.to_string(),
    }
}
