//! Best-effort value decoding.
//!
//! Exporters leak encoding parameters into values and mix quoted-printable
//! escapes into otherwise plain text. None of this is a full vCard value
//! parser; a value that cannot be decoded is passed through.

use std::sync::LazyLock;

use regex::Regex;

/// A `;<param>;...:` run left behind by `CHARSET`/`ENCODING` parameters.
#[expect(clippy::expect_used, reason = "static pattern is known to compile")]
static PARAMETER_REMNANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i);[0-9A-Za-z_]+;.*:").expect("parameter remnant pattern should compile")
});

/// A line break followed by the whitespace of a folded continuation.
#[expect(clippy::expect_used, reason = "static pattern is known to compile")]
static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+").expect("continuation pattern should compile"));

/// Decodes a raw property value.
///
/// Steps, in order:
/// 1. drop `;<param>;...:` remnants and one leading `;`
/// 2. decode `=XX` escapes as UTF-8, keeping the value if that fails
/// 3. normalize CRLF and join folded continuations
/// 4. trim
///
/// A value without `;` or `=` comes back trimmed and otherwise untouched.
#[must_use]
pub fn decode_value(raw: &str) -> String {
    let mut value = raw.to_string();

    if value.contains(';') {
        value = PARAMETER_REMNANT.replace_all(&value, "").into_owned();
        if let Some(stripped) = value.strip_prefix(';') {
            value = stripped.to_string();
        }
    }

    if value.contains('=') {
        if let Some(decoded) = percent_decode_strict(&value.replace('=', "%")) {
            value = decoded;
        } else {
            tracing::trace!(value = %value, "Leaving undecodable escapes in place");
        }
    }

    let value = value.replace("\r\n", "\n");
    CONTINUATION.replace_all(&value, "").trim().to_string()
}

/// Decodes `%XX` escapes into UTF-8.
///
/// Returns `None` on a `%` without two hex digits or if the decoded bytes
/// are not valid UTF-8.
fn percent_decode_strict(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit)?;
            let low = bytes.get(i + 2).copied().and_then(hex_digit)?;
            decoded.push((high << 4) | low);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).ok()
}

fn hex_digit(byte: u8) -> Option<u8> {
    char::from(byte)
        .to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
}
