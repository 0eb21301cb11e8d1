//! # Error taxonomy for backend calls
//!
//! [`ApiError`] is what a single HTTP round trip can fail with. Status codes the
//! UI treats specially get their own variant; everything else is kept with its
//! status so it can be logged, then collapses into [`ErrorCategory::TryAgain`].
//!
//! [`ActionError`] adds the failures caught before any request is made: a
//! message that fails validation, or a protected action without a session.
//!
//! Views never inspect variants. They call [`ActionError::alert`] with what was
//! being done ([`Subject`] + [`Action`]) and show the resulting string.

use store::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 404
    #[error("{}", message.as_deref().unwrap_or("not found"))]
    NotFound { message: Option<String> },
    /// 400
    #[error("{}", message.as_deref().unwrap_or("invalid input"))]
    InvalidInput { message: Option<String> },
    /// 403
    #[error("{}", message.as_deref().unwrap_or("forbidden"))]
    Forbidden { message: Option<String> },
    /// 401
    #[error("{}", message.as_deref().unwrap_or("unauthorized"))]
    Unauthorized { message: Option<String> },
    /// Any other non-success status.
    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not what the endpoint returns.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}

/// What the user is told, independent of the exact failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    InvalidInput,
    Forbidden,
    TryAgain,
}

/// The kind of record an action was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Post,
    Comment,
    Profile,
    Account,
}

impl Subject {
    fn noun(self) -> &'static str {
        match self {
            Subject::Post => "post",
            Subject::Comment => "comment",
            Subject::Profile => "profile",
            Subject::Account => "account",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Subject::Post => "Post",
            Subject::Comment => "Comment",
            Subject::Profile => "Profile",
            Subject::Account => "Account",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
    Login,
    Register,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Login => "sign in to",
            Action::Register => "register",
        }
    }

    /// Comments are "added", everything else is "created".
    fn verb_for(self, subject: Subject) -> &'static str {
        match (self, subject) {
            (Action::Create, Subject::Comment) => "add",
            _ => self.verb(),
        }
    }

    fn permission_verb(self) -> &'static str {
        match self {
            Action::Update => "edit",
            other => other.verb(),
        }
    }
}

impl ApiError {
    /// Map a non-success HTTP status and the server's `message` field.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => ApiError::InvalidInput { message },
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Status { status, message },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::NotFound { .. } => ErrorCategory::NotFound,
            ApiError::InvalidInput { .. } => ErrorCategory::InvalidInput,
            ApiError::Forbidden { .. } => ErrorCategory::Forbidden,
            _ => ErrorCategory::TryAgain,
        }
    }

    /// The `message` the backend put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message }
            | ApiError::InvalidInput { message }
            | ApiError::Forbidden { message }
            | ApiError::Unauthorized { message }
            | ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The backend rejected the session itself (as opposed to the request).
    pub fn revokes_session(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. }
        )
    }

    /// Text for the blocking notification shown after a failed call.
    pub fn user_message(&self, subject: Subject, action: Action) -> String {
        if subject == Subject::Account {
            return match (self.server_message(), action) {
                (Some(message), _) => message.to_string(),
                (None, Action::Register) => "Error registering user".to_string(),
                (None, _) => "Invalid credentials".to_string(),
            };
        }
        match self.category() {
            ErrorCategory::NotFound => format!("{} not found", subject.title()),
            ErrorCategory::InvalidInput => format!("Invalid {} data", subject.noun()),
            ErrorCategory::Forbidden => format!(
                "You do not have permission to {} this {}",
                action.permission_verb(),
                subject.noun()
            ),
            ErrorCategory::TryAgain => format!(
                "Failed to {} {}. Please try again.",
                action.verb_for(subject),
                subject.noun()
            ),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Failure of a user action, including checks made before any request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("no session")]
    SignedOut,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    pub fn alert(&self, subject: Subject, action: Action) -> String {
        match self {
            ActionError::Invalid(err) => err.to_string(),
            ActionError::SignedOut if subject == Subject::Comment => {
                "Please login to comment".to_string()
            }
            ActionError::SignedOut => "Please login first".to_string(),
            ActionError::Api(err) => err.user_message(subject, action),
        }
    }

    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ActionError::Api(err) => Some(err),
            _ => None,
        }
    }
}
