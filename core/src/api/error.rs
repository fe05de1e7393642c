//! Public error types.
//!
//! Mapping stops at the first failure and returns it unchanged to the caller;
//! errors are never aggregated.

use transcribe_types::Ty;

/// Error type accepted from user conversion and inspection functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// No dispatch rule bridges the destination and source types.
///
/// Besides being reported to the caller, this is the signal the Map→Sequence
/// rule tests for before falling back to flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no valid mapping found for `{dst}` from `{src}`")]
pub struct NoValidMapping {
    pub dst: Ty,
    pub src: Ty,
}

impl NoValidMapping {
    pub fn new(dst: Ty, src: Ty) -> Self {
        Self { dst, src }
    }
}

/// Error returned by [`Mapper::map`](crate::Mapper::map).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    NoValidMapping(#[from] NoValidMapping),

    /// A registered conversion function returned an error.
    #[error("conversion from `{src}` to `{dst}` failed: {error}")]
    Conversion {
        dst: Ty,
        src: Ty,
        #[source]
        error: BoxError,
    },

    /// A registered inspection function returned an error.
    #[error("inspection of `{dst}` (mapped from `{src}`) failed: {error}")]
    Inspection {
        dst: Ty,
        src: Ty,
        #[source]
        error: BoxError,
    },

    /// Nesting went deeper than [`MapperOptions::max_depth`](crate::MapperOptions::max_depth).
    #[error("mapping exceeded the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

impl Error {
    /// The descriptor pair, if this is a no-valid-mapping failure.
    pub fn no_valid_mapping(&self) -> Option<&NoValidMapping> {
        match self {
            Error::NoValidMapping(inner) => Some(inner),
            _ => None,
        }
    }

    /// The error returned by a user conversion or inspection function.
    ///
    /// Downcast it to recover the concrete type:
    ///
    /// ```ignore
    /// let err = mapper.map(&mut dst, &src).unwrap_err();
    /// let mine = err.user_error().and_then(|e| e.downcast_ref::<MyError>());
    /// ```
    pub fn user_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Conversion { error, .. } | Error::Inspection { error, .. } => Some(&**error),
            _ => None,
        }
    }
}
