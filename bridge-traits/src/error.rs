use thiserror::Error;

/// Transport failure: the request never produced an HTTP response.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The transport could not be constructed or is unsupported here
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    /// DNS, TLS, connection or timeout failure
    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BridgeError::NotAvailable("Failed to build HTTP client".to_string()).to_string(),
            "Bridge capability not available: Failed to build HTTP client"
        );
        assert_eq!(
            BridgeError::OperationFailed("Request timed out".to_string()).to_string(),
            "Bridge operation failed: Request timed out"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_traits<T: Send + Sync + std::error::Error>() {}
        assert_traits::<BridgeError>();
    }
}
