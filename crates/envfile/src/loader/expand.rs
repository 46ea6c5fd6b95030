//! Shell-style `${NAME}` expansion.
//!
//! Responsibilities:
//! - Substitute `${NAME}` and bare `$NAME` references via a caller-supplied
//!   lookup, with unresolved references expanding to the empty string.
//!
//! Does NOT handle:
//! - Deciding where values come from; the lookup closure owns that.
//!
//! Invariants:
//! - Pure: no ambient state is consulted.
//! - A `$` that does not introduce a reference is preserved literally.

/// Expand `${NAME}` and bare `$NAME` references in `value`.
///
/// A bare name is a run of ASCII alphanumerics and underscores; the shell
/// special parameters (`*`, `#`, `$`, `@`, `!`, `?`, `-`, and single digits)
/// form one-character names. `${}` and an unterminated `${` are consumed
/// without output. Unresolved references expand to the empty string.
pub(crate) fn expand(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let (name, consumed) = reference_name(after);
        match name {
            Some(name) if !name.is_empty() => {
                out.push_str(&lookup(name).unwrap_or_default());
            }
            // Bad syntax (`${}` or unterminated `${`) is consumed silently.
            Some(_) => {}
            None => out.push('$'),
        }
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

/// Extract the reference name following a `$`.
///
/// Returns the name and the number of bytes consumed after the `$`.
/// `Some("")` marks bad syntax to be eaten; `None` means the `$` stands
/// alone and stays literal.
fn reference_name(after: &str) -> (Option<&str>, usize) {
    let bytes = after.as_bytes();
    match bytes.first().copied() {
        None => (None, 0),
        Some(b'{') => match after[1..].find('}') {
            Some(0) => (Some(""), 2),
            Some(end) => (Some(&after[1..1 + end]), end + 2),
            None => (Some(""), 1),
        },
        Some(c) if is_special(c) => (Some(&after[..1]), 1),
        _ => {
            let len = bytes.iter().take_while(|&&c| is_name_byte(c)).count();
            if len == 0 {
                (None, 0)
            } else {
                (Some(&after[..len]), len)
            }
        }
    }
}

fn is_special(c: u8) -> bool {
    matches!(c, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-') || c.is_ascii_digit()
}

fn is_name_byte(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphanumeric()
}
