pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("the content store is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Network(String),

    #[error("store returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("not signed in")]
    Unauthorized,

    #[error("could not read response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("realtime error: {0}")]
    Realtime(String),
}

impl StoreError {
    pub fn network(e: impl std::fmt::Display) -> Self {
        Self::Network(e.to_string())
    }

    pub fn decode(e: impl std::fmt::Display) -> Self {
        Self::Decode(e.to_string())
    }

    pub fn encode(e: impl std::fmt::Display) -> Self {
        Self::Encode(e.to_string())
    }

    /// Picks the most useful message out of a PostgREST / GoTrue error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 || status == 403 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error_description", "msg", "error"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| body.trim().to_string());
        Self::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgrest_message_is_extracted() {
        let err = StoreError::from_status(
            400,
            r#"{"code":"23502","message":"null value in column \"name\"","details":null}"#,
        );
        assert_eq!(
            err,
            StoreError::Status {
                status: 400,
                message: "null value in column \"name\"".to_string()
            }
        );
    }

    #[test]
    fn gotrue_description_is_extracted() {
        let err = StoreError::from_status(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "store returned 400: Invalid login credentials");
    }

    #[test]
    fn plain_bodies_pass_through() {
        let err = StoreError::from_status(502, "Bad gateway\n");
        assert_eq!(err.to_string(), "store returned 502: Bad gateway");
    }

    #[test]
    fn auth_failures_map_to_unauthorized() {
        assert_eq!(StoreError::from_status(401, "{}"), StoreError::Unauthorized);
        assert_eq!(StoreError::from_status(403, ""), StoreError::Unauthorized);
    }
}
