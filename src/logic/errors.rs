use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    HttpStatus(u16), // Non-2xx answer from the server
    NetworkError,    // DNS, routing, etc.
    Other,
}

impl ErrorType {
    /// Short label for the status bar
    pub fn label(&self) -> String {
        match self {
            ErrorType::ConnectionRefused => "refused".to_string(),
            ErrorType::Timeout => "timeout".to_string(),
            ErrorType::HttpStatus(code) => format!("HTTP {}", code),
            ErrorType::NetworkError => "network".to_string(),
            ErrorType::Other => "error".to_string(),
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Non-2xx responses are reported as "HTTP <code>: <detail>"
    for cause in error.chain() {
        let text = cause.to_string();
        if let Some(code) = text
            .strip_prefix("HTTP ")
            .and_then(|rest| rest.split(':').next())
            .and_then(|code| code.trim().parse::<u16>().ok())
        {
            return ErrorType::HttpStatus(code);
        }
    }

    // Transport-level errors carry flags on reqwest::Error
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if let Some(status) = reqwest_err.status() {
                return ErrorType::HttpStatus(status.as_u16());
            }
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") || error_msg.contains("connect") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for toasts - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // No reqwest error: the root cause is the most specific message
    error.root_cause().to_string()
}
