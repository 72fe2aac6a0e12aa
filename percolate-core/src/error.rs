//! Error types for the percolate core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::UnionFind`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// An element id outside the structure's universe was supplied.
    #[error("element {id} is out of range for a universe of {len} elements")]
    OutOfRange {
        /// The offending element id.
        id: usize,
        /// Number of elements in the universe.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// An element id outside the structure's universe was supplied.
        OutOfRange => OutOfRange { .. } => "UNION_FIND_OUT_OF_RANGE",
    }
}

/// Error type produced when constructing or running a [`crate::Percolation`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PercolationError {
    /// Grid side length must be greater than zero.
    #[error("grid side must be at least 1")]
    ZeroSide,
    /// `step` was called after the visitation order was fully consumed.
    #[error("visitation order exhausted: all sites of the {side}×{side} grid are open")]
    ExhaustedSequence {
        /// Side length of the exhausted grid.
        side: usize,
    },
    /// A `(row, col)` pair outside the grid was supplied to an accessor.
    #[error("site ({row}, {col}) is outside a {side}×{side} grid")]
    SiteOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid.
        side: usize,
    },
    /// The disjoint-set engine rejected an operation.
    ///
    /// The driver only ever passes ids it derived from in-bounds grid
    /// coordinates, so this variant signals a driver bug rather than a
    /// recoverable condition. It exists so engine failures surface instead
    /// of panicking.
    #[error("disjoint-set engine failed: {error}")]
    UnionFind {
        /// Underlying engine error.
        #[from]
        #[source]
        error: UnionFindError,
    },
}

define_error_codes! {
    /// Stable codes describing [`PercolationError`] variants.
    enum PercolationErrorCode for PercolationError {
        /// Grid side length must be greater than zero.
        ZeroSide => ZeroSide => "PERCOLATION_ZERO_SIDE",
        /// `step` was called after the visitation order was fully consumed.
        ExhaustedSequence => ExhaustedSequence { .. } => "PERCOLATION_EXHAUSTED",
        /// A `(row, col)` pair outside the grid was supplied to an accessor.
        SiteOutOfBounds => SiteOutOfBounds { .. } => "PERCOLATION_SITE_OUT_OF_BOUNDS",
        /// The disjoint-set engine rejected an operation.
        UnionFind => UnionFind { .. } => "PERCOLATION_UNION_FIND",
    }
}

impl PercolationError {
    /// Retrieve the inner [`UnionFindErrorCode`] when the error originated in the engine.
    pub const fn union_find_code(&self) -> Option<UnionFindErrorCode> {
        match self {
            Self::UnionFind { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PercolationError>;
