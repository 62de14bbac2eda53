//! Flash-style notices carried across redirects
//!
//! A page flow that finishes with a redirect attaches its outcome as
//! `notice`/`level` query parameters on the `Location`; the next page reads
//! them back and echoes them in its model.

use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

/// Query parameter holding the notice text
pub const NOTICE_PARAM: &str = "notice";

/// Query parameter holding the notice level
pub const LEVEL_PARAM: &str = "level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }

    /// Unknown levels read as `Info`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "success" => NoticeLevel::Success,
            "warning" => NoticeLevel::Warning,
            "error" => NoticeLevel::Error,
            _ => NoticeLevel::Info,
        }
    }
}

/// A message shown once on the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Read a notice back from query pairs, if one was attached
    pub fn from_pairs(pairs: &[(String, String)]) -> Option<Self> {
        let message = pairs
            .iter()
            .find(|(key, _)| key == NOTICE_PARAM)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())?;

        let level = pairs
            .iter()
            .find(|(key, _)| key == LEVEL_PARAM)
            .map(|(_, value)| NoticeLevel::parse(value))
            .unwrap_or(NoticeLevel::Info);

        Some(Self::new(level, message))
    }

    /// `path` with this notice appended as query parameters
    pub fn attach_to(&self, path: &str) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}&{}={}",
            path,
            separator,
            NOTICE_PARAM,
            urlencoding::encode(&self.message),
            LEVEL_PARAM,
            self.level.as_str()
        )
    }
}

/// `303 See Other` to `path` carrying `notice`
pub fn redirect_with_notice(path: &str, notice: &Notice) -> Response {
    Redirect::to(&notice.attach_to(path)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_attach_encodes_message() {
        let notice = Notice::success("Specimen deleted successfully.");
        assert_eq!(
            notice.attach_to("/all_specimens"),
            "/all_specimens?notice=Specimen%20deleted%20successfully.&level=success"
        );
        assert_eq!(
            Notice::error("x&y").attach_to("/all_specimens?page=2"),
            "/all_specimens?page=2&notice=x%26y&level=error"
        );
    }

    #[test]
    fn test_from_pairs() {
        let notice = Notice::from_pairs(&pairs(&[
            ("page", "2"),
            ("notice", "Specimen not found"),
            ("level", "error"),
        ]));
        assert_eq!(notice, Some(Notice::error("Specimen not found")));

        let defaulted = Notice::from_pairs(&pairs(&[("notice", "hi"), ("level", "loud")]));
        assert_eq!(defaulted.map(|n| n.level), Some(NoticeLevel::Info));

        assert_eq!(Notice::from_pairs(&pairs(&[("notice", "  ")])), None);
        assert_eq!(Notice::from_pairs(&[]), None);
    }

    #[test]
    fn test_redirect_is_see_other() {
        let response = redirect_with_notice("/new_specimen", &Notice::success("done"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/new_specimen?notice=done&level=success"
        );
    }
}
