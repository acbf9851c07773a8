use thiserror::Error;

/// Errors surfaced by the forward/backward/update protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An input or gradient batch does not have the shape a layer expects.
    ///
    /// Layer widths are only checked when data flows, so a mismatched
    /// stack surfaces here on the first `forward`.
    #[error("{layer}.{call}: shape mismatch, expected {expected:?}, got {found:?}")]
    DimensionMismatch {
        layer: &'static str,
        call: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A call arrived before the call that feeds it: `backward` needs a
    /// cached `forward` input, `update` needs gradients from `backward`.
    #[error("{layer}.{call}: called without a preceding {requires}")]
    OutOfOrder {
        layer: &'static str,
        call: &'static str,
        requires: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
