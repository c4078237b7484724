//! Error types for the protocol layer.
//!
//! Each crate in Hotelforge defines its own error enum. A `ProtocolError`
//! means the request itself broke an API rule; the occupancy table was
//! never consulted.

/// Errors raised while validating a request body.
///
/// The `Display` text is shown to the guest as-is, so it is phrased for
/// people rather than for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The requested room count is not positive or exceeds the per-booking
    /// limit.
    #[error("{}", count_message(.requested, .max))]
    InvalidRequestCount { requested: i64, max: usize },

    /// The body could not be read as the expected JSON shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

fn count_message(requested: &i64, max: &usize) -> String {
    if *requested < 1 {
        "Must book at least 1 room".to_string()
    } else {
        format!("Cannot book more than {max} rooms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_message() {
        let err = ProtocolError::InvalidRequestCount {
            requested: 6,
            max: 5,
        };
        assert_eq!(err.to_string(), "Cannot book more than 5 rooms");
    }

    #[test]
    fn test_too_few_message() {
        let err = ProtocolError::InvalidRequestCount {
            requested: 0,
            max: 5,
        };
        assert_eq!(err.to_string(), "Must book at least 1 room");

        let err = ProtocolError::InvalidRequestCount {
            requested: -3,
            max: 5,
        };
        assert_eq!(err.to_string(), "Must book at least 1 room");
    }
}
