use serde::Deserialize;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Service(Problem),
    BadEndpoint(url::ParseError),
    ProtocolViolation(&'static str),
    Generic(String),
}

impl ApiError {
    pub async fn get_error_from_http(err_response: reqwest::Response) -> ApiError {
        let status = err_response.status();
        if let Ok(problem) = err_response.json::<Problem>().await {
            ApiError::Service(problem)
        } else {
            ApiError::Generic(format!("HTTP error: {status}"))
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> ApiError {
        ApiError::Http(err)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> ApiError {
        ApiError::BadEndpoint(err)
    }
}

impl From<Problem> for ApiError {
    fn from(err: Problem) -> ApiError {
        ApiError::Service(err)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self {
            ApiError::Http(e) => {
                write!(f, "HTTP error: {e}")
            }
            ApiError::Service(e) => {
                write!(f, "Fauna error: {e}")
            }
            ApiError::BadEndpoint(e) => write!(f, "invalid endpoint URL: {e}"),
            ApiError::ProtocolViolation(e) => write!(f, "protocol error: {e}"),
            ApiError::Generic(e) => write!(f, "error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error body returned by the REST service on failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Problem {
    pub error: String,
    pub reason: Option<String>,
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(reason) = &self.reason {
            write!(f, " ({reason})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain(
        r#"{"error": "unauthorized"}"#,
        Problem {
            error: "unauthorized".to_string(),
            reason: None,
        })]
    #[case::with_reason(
        r#"{"error": "invalid resource", "reason": "class does not exist"}"#,
        Problem {
            error: "invalid resource".to_string(),
            reason: Some("class does not exist".to_string()),
        })]
    fn test_deserialize_problem(#[case] json: &str, #[case] expected: Problem) {
        let actual = serde_json::from_str(json).expect("Deserialization must not fail");
        assert_eq!(expected, actual);
    }

    #[rstest]
    #[case::plain(Problem { error: "unauthorized".to_string(), reason: None }, "unauthorized")]
    #[case::with_reason(
        Problem { error: "invalid resource".to_string(), reason: Some("bad ref".to_string()) },
        "invalid resource (bad ref)"
    )]
    fn test_problem_display(#[case] problem: Problem, #[case] expected: &str) {
        assert_eq!(problem.to_string(), expected);
    }
}
