//! Frontend, deals with reading and writing knowledge-base clause files.

/// Imports this crate's prelude.
///
/// Pass `pub` when calling this macro to make the imports public.
#[macro_export]
macro_rules! prelude {
    {} => { use $crate::prelude::*; };
    { pub } => { pub use $crate::prelude::*; };
}

/// Common traits and types defined by this crate.
///
/// See also the [`prelude!`] macro.
pub mod prelude {
    pub use error_chain::bail;

    pub use dpll::prelude::*;

    pub use crate::Lit;

    pub use err::{Res, ResExt};

    /// Error-management.
    pub mod err {
        error_chain::error_chain! {
            types {
                Error, ErrorKind, ResExt, Res;
            }
            foreign_links {
                Io(std::io::Error);
            }
        }

        impl From<Error> for Vec<Error> {
            fn from(e: Error) -> Self {
                vec![e]
            }
        }
    }
}

pub mod dump;
pub mod parse;

use crate::prelude::*;

/// A literal: a variable id and a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    idx: usize,
    neg: bool,
}
impl Lit {
    pub fn new(idx: usize, neg: bool) -> Self {
        Self { idx, neg }
    }

    /// Boundary constructor from a signed integer.
    ///
    /// `0` has no polarity and yields `None`; it must never reach the
    /// solver.
    pub fn of_int(n: i64) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self::new(n.unsigned_abs() as usize, n < 0))
        }
    }
}
impl Display for Lit {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.neg {
            write!(fmt, "-")?
        }
        self.idx.fmt(fmt)
    }
}
impl Literal for Lit {
    fn var(&self) -> usize {
        self.idx
    }
    fn is_negated(&self) -> bool {
        self.neg
    }
    fn of_var(var: usize, negated: bool) -> Self {
        Self::new(var, negated)
    }
    fn negate(self) -> Self {
        Self {
            idx: self.idx,
            neg: !self.neg,
        }
    }
    fn ref_negate(&self) -> Self {
        self.negate()
    }
}
