/// Errors from XWD decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum XwdError {
    /// The buffer is shorter than the header geometry requires.
    ///
    /// This is the stable "not enough bytes" value returned by the
    /// zero-copy entry points; callers retrying with a larger buffer can
    /// match on it directly.
    #[error("incomplete buffer: need {needed} bytes, got {actual}")]
    IncompleteBuffer { needed: u64, actual: u64 },

    /// `width * height * 4` does not fit in a single allocation.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// The stream ended before the exact byte count a section requires.
    #[cfg(feature = "std")]
    #[error("stream ended mid-section: truncated input")]
    TruncatedStream,

    /// Any other failure from the underlying stream, propagated unmodified.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
