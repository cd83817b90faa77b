use core::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Non-success answer from the phonebook API, with the server's `error` text (may be empty).
    Api { status: u16, message: String },
    Io(std::io::Error),
    Json(serde_json::Error),
    MalformedId(String),
    NotFound(String),
    Request(reqwest::Error),
    Store(String),
    Url(url::ParseError),
    Validation(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Text shown to the user in a notification banner.
    /// Server-provided messages win over the local description.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } if !message.is_empty() => message.clone(),
            AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Request(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Url(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Api { status, message } => {
                if message.is_empty() {
                    write!(f, "Request failed with status {}", status)
                } else {
                    write!(f, "Request failed with status {}: {}", status, message)
                }
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid JSON data: {}", e)
            }
            AppError::MalformedId(_) => {
                write!(f, "malformatted id")
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Request(e) => {
                write!(f, "Failed to reach the phonebook server: {}", e)
            }
            AppError::Store(msg) => {
                write!(f, "Contact store failure: {}", msg)
            }
            AppError::Url(e) => {
                write!(f, "Invalid url: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("name missing".to_string());

        assert_eq!(format!("{}", err), "Validation failed: name missing");
        assert_eq!(err.user_message(), "name missing");
    }

    #[test]
    fn malformed_id_is_not_a_not_found() {
        let err = AppError::MalformedId("123".to_string());

        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "malformatted id");
        assert!(AppError::NotFound("Person".to_string()).is_not_found());
    }

    #[test]
    fn api_error_prefers_server_text() {
        let err = AppError::Api {
            status: 400,
            message: "number missing".to_string(),
        };
        assert_eq!(err.user_message(), "number missing");

        let bare = AppError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(bare.user_message(), "Request failed with status 500");
    }
}
