//! Contract checks around name operations.
//!
//! Every public operation on [`Name`](crate::Name) runs its preconditions
//! before touching any state, then its postconditions and the class
//! invariants on the result. Each check either passes silently or returns
//! the matching [`Error`] kind at once.
//!
//! | Check                        | Error kind      |
//! |------------------------------|-----------------|
//! | `require_index`              | `Argument`      |
//! | `require_insert_index`       | `Argument`      |
//! | `require_masked`             | `Argument`      |
//! | `require_no_dangling_escape` | `Argument`      |
//! | `ensure`                     | `Postcondition` |
//! | `check_invariants`           | `Invariant`     |
//!
//! # Invariants
//!
//! 1. The tracked component count agrees with the stored components.
//! 2. Every stored component is well-masked for the delimiter: no unescaped
//!    delimiter and no dangling escape.
//! 3. The delimiter is a single character other than the escape character.

use crate::codec::{self, ESCAPE_CHARACTER};
use crate::delimiter::Delimiter;
use crate::error::{ArgumentError, Error, Result};
use crate::store::ComponentStore;

// ============================================================================
// PRECONDITIONS
// ============================================================================

/// `i` must address an existing component.
pub fn require_index(i: usize, len: usize) -> Result<()> {
    if i >= len {
        return Err(ArgumentError::IndexOutOfBounds { index: i, len }.into());
    }
    Ok(())
}

/// `i` may also be one past the last component.
pub fn require_insert_index(i: usize, len: usize) -> Result<()> {
    if i > len {
        return Err(ArgumentError::InsertIndexOutOfBounds { index: i, len }.into());
    }
    Ok(())
}

/// `component` must be well-masked for `delimiter`.
pub fn require_masked(component: &str, delimiter: Delimiter) -> Result<()> {
    if codec::has_dangling_escape(component) {
        return Err(ArgumentError::DanglingEscape(component.to_string()).into());
    }
    if !codec::is_masked(component, delimiter.as_char()) {
        return Err(ArgumentError::UnmaskedDelimiter {
            component: component.to_string(),
            delimiter: delimiter.as_char(),
        }
        .into());
    }
    Ok(())
}

/// A raw masked string must not end in an escape that escapes nothing.
pub fn require_no_dangling_escape(raw: &str) -> Result<()> {
    if codec::has_dangling_escape(raw) {
        return Err(ArgumentError::DanglingEscape(raw.to_string()).into());
    }
    Ok(())
}

// ============================================================================
// POSTCONDITIONS
// ============================================================================

/// Fail with a postcondition error unless `condition` holds.
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(postcondition_failed(message()))
}

/// Build (and log) a postcondition error
pub fn postcondition_failed(message: String) -> Error {
    tracing::error!(%message, "postcondition violated");
    Error::Postcondition(message)
}

// ============================================================================
// INVARIANTS
// ============================================================================

/// Re-check the class invariants of a store under `delimiter`.
pub fn check_invariants(store: &dyn ComponentStore, delimiter: Delimiter) -> Result<()> {
    if delimiter.as_char() == ESCAPE_CHARACTER {
        return Err(invariant("delimiter is the escape character".to_string()));
    }

    let components = store.to_vec();
    if components.len() != store.no_components() {
        return Err(invariant(format!(
            "tracked component count {} disagrees with {} stored components",
            store.no_components(),
            components.len()
        )));
    }

    if let Some((i, c)) = components
        .iter()
        .enumerate()
        .find(|(_, c)| !codec::is_masked(c, delimiter.as_char()))
    {
        return Err(invariant(format!(
            "component {} ({:?}) is not masked for delimiter {:?}",
            i, c, delimiter.as_char()
        )));
    }

    Ok(())
}

fn invariant(message: String) -> Error {
    tracing::error!(%message, "invariant violated");
    Error::Invariant(message)
}
