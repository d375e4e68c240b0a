use core::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Errors raised at construction time, before any buffer is mutated.
///
/// Algorithmic misuse that indicates a logic defect (a resolved index escaping
/// its range) is not represented here; it panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more required sequence bindings were absent when building a
    /// [`RawSequence`](crate::RawSequence). The payload records every absent
    /// binding, not just the first.
    #[error("incomplete sequence bindings: {0} cannot be absent")]
    MissingBindings(MissingBindings),
    /// A cursor or combination buffer was requested over a zero-length
    /// sequence, for which no position can be resolved.
    #[error("cyclic cursor requires a non-empty sequence")]
    EmptySequence,
}

/// Records which of the three sequence bindings were absent.
///
/// Displays as a comma-separated list of the missing binding names, e.g.
/// `length, set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingBindings {
    /// The `length` binding was absent.
    pub length: bool,
    /// The `get` binding was absent.
    pub get: bool,
    /// The `set` binding was absent.
    pub set: bool,
}

impl MissingBindings {
    pub(crate) fn any(&self) -> bool {
        self.length || self.get || self.set
    }
}

impl Display for MissingBindings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let names = [
            (self.length, "length"),
            (self.get, "get"),
            (self.set, "set"),
        ];
        for (missing, name) in names {
            if missing {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
