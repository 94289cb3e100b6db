// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping matched bytes back into regex literals.

/// Escape `bytes` so the resulting pattern matches exactly those bytes.
///
/// Valid UTF-8 goes through [`regex::escape`]. Otherwise ASCII bytes are
/// escaped individually and every other byte becomes a `(?-u:\xNN)` byte class.
pub fn escape_bytes(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return regex::escape(text);
    }

    let mut out = String::with_capacity(bytes.len() * 2);
    let mut buf = [0u8; 4];
    for &b in bytes {
        if b.is_ascii() {
            out.push_str(&regex::escape(char::from(b).encode_utf8(&mut buf)));
        } else {
            out.push_str(&format!("(?-u:\\x{b:02X})"));
        }
    }
    out
}

/// Alternation of escaped literals, in the given order.
pub fn literal_alternation<'a>(keys: impl IntoIterator<Item = &'a [u8]>) -> String {
    keys.into_iter()
        .map(escape_bytes)
        .collect::<Vec<_>>()
        .join("|")
}
