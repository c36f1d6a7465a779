use thiserror::Error;

/// Failures a visualization instance can report.
///
/// Degenerate inputs (an empty nucleus, zero electrons) are not errors:
/// the relevant builders return empty output and the frame proceeds.
#[derive(Debug, Error)]
pub enum VizError {
    /// The drawing capability is missing or unusable at start. Fatal to the
    /// visualization instance; the caller shows an error state, no retry.
    #[error("drawing capability unavailable: {0}")]
    Configuration(String),

    /// A shell label that does not start with a digit 1-9. Failing here keeps
    /// NaN geometry out of the mesh pipeline.
    #[error("malformed shell label {0:?}: expected \"<n><subshell>\" with n in 1..=9")]
    MalformedShellLabel(String),
}
