//! Error types for the kruskal core library.
//!
//! Each public error enum carries a stable, machine-readable code so callers
//! can log or match on failures without depending on message text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::MinHeap`] and other [`crate::PriorityQueue`]
/// implementations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The queue holds no entries.
    #[error("priority queue is empty")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The queue holds no entries.
        Empty => Empty => "HEAP_EMPTY",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The position was issued by a different disjoint set.
    #[error("position {index} does not belong to this disjoint set")]
    InvalidPosition {
        /// Entry index carried by the foreign position.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The position was issued by a different disjoint set.
        InvalidPosition => InvalidPosition { .. } => "DISJOINT_SET_INVALID_POSITION",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a vertex that the graph did not list.
    #[error("edge {edge} references a vertex outside the graph's vertex set")]
    UnknownVertex {
        /// Ordinal of the offending edge in the graph's edge sequence.
        edge: usize,
    },
    /// A spanning tree was requested but the forest has several components.
    #[error("graph is disconnected: spanning forest has {components} components")]
    Disconnected {
        /// Number of connected components in the forest.
        components: usize,
    },
    /// A structure used by the builder reported an error it should never
    /// produce for validated input.
    #[error("MST invariant violated: {invariant}{}", index_suffix(.index))]
    InvariantViolation {
        /// Description of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Entry index reported by the failing structure, when it has one.
        index: Option<usize>,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a vertex that the graph did not list.
        UnknownVertex => UnknownVertex { .. } => "MST_UNKNOWN_VERTEX",
        /// A spanning tree was requested but the graph is disconnected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |index| format!(" (index {index})"))
}

impl From<DisjointSetError> for MstError {
    fn from(error: DisjointSetError) -> Self {
        match error {
            DisjointSetError::InvalidPosition { index } => Self::InvariantViolation {
                invariant: "vertex positions must belong to the builder's disjoint set",
                index: Some(index),
            },
        }
    }
}

impl From<HeapError> for MstError {
    fn from(_: HeapError) -> Self {
        Self::InvariantViolation {
            invariant: "edge heap must be non-empty while selecting",
            index: None,
        }
    }
}
