//! Masking codec
//!
//! Pure functions that move between a delimited, masked string and its list
//! of masked components. A component is *masked* when every literal
//! delimiter or escape character inside it is prefixed with
//! [`ESCAPE_CHARACTER`].
//!
//! `split` never interprets escapes, it only uses them to skip over escaped
//! delimiters. Resolving escapes is the job of [`unmask`], which is only used
//! for human-facing output.

/// The fixed escape character. Not configurable.
pub const ESCAPE_CHARACTER: char = '\\';

/// Delimiter used by the canonical data string form.
pub const DEFAULT_DELIMITER: char = '.';

/// Split a masked string at every unescaped `delimiter`.
///
/// An escape character and the character after it are copied together, so
/// an escaped delimiter never ends a component. A trailing escape with
/// nothing after it is copied as-is. The empty string yields one empty
/// component.
pub fn split(raw: &str, delimiter: char) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            current.push(c);
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == delimiter {
            components.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    components.push(current);
    components
}

/// Number of components `split(raw, delimiter)` would return.
pub fn count_components(raw: &str, delimiter: char) -> usize {
    let mut count = 1;
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            chars.next();
        } else if c == delimiter {
            count += 1;
        }
    }
    count
}

/// Join masked components with `delimiter`. Inverse of [`split`] for
/// well-masked components.
pub fn join<S: AsRef<str>>(components: &[S], delimiter: char) -> String {
    let mut out = String::new();
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(component.as_ref());
    }
    out
}

/// Resolve escape sequences in a masked component.
///
/// `\x` becomes `x` for any `x`. A dangling escape at the end is kept.
pub fn unmask(masked: &str) -> String {
    let mut out = String::with_capacity(masked.len());
    let mut chars = masked.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape every delimiter and escape character in `unmasked`.
pub fn mask(unmasked: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(unmasked.len());
    for c in unmasked.chars() {
        if c == ESCAPE_CHARACTER || c == delimiter {
            out.push(ESCAPE_CHARACTER);
        }
        out.push(c);
    }
    out
}

/// True if `component` has no unescaped `delimiter` and no dangling escape.
pub fn is_masked(component: &str, delimiter: char) -> bool {
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            if chars.next().is_none() {
                return false;
            }
        } else if c == delimiter {
            return false;
        }
    }
    true
}

/// True if `raw` ends in an escape character that escapes nothing.
pub fn has_dangling_escape(raw: &str) -> bool {
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER && chars.next().is_none() {
            return true;
        }
    }
    false
}
