//! Endpoint paths and report query strings

/// `GET` service status (authenticated)
pub const STATUS_PATH: &str = "/api/v1/status";
/// `GET` aggregate summary report
pub const SUMMARY_PATH: &str = "/api/v1/reports/summary";
/// `GET` session list report
pub const SESSIONS_PATH: &str = "/api/v1/reports/sessions";
/// `GET` hour-of-day activity report
pub const ACTIVITY_PATH: &str = "/api/v1/reports/activity";
/// `GET` identity of the key owner
pub const ME_PATH: &str = "/api/v1/me";
/// `GET` unauthenticated liveness probe
pub const HEALTH_PATH: &str = "/health";

/// Optional `from`/`to` bounds of a report request.
///
/// Bounds are passed through untouched; the backend validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    /// Range from optional borrowed bounds
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    /// Range with both bounds set
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Unbounded range: the backend picks its default window
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Encoded query string without the leading `?`.
    ///
    /// Empty bounds are skipped; `from` always precedes `to`.
    pub fn query_string(&self) -> String {
        [("from", &self.from), ("to", &self.to)]
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", name, urlencoding::encode(v)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query string to `path`, if there is one
    pub fn apply(&self, path: &str) -> String {
        let qs = self.query_string();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        }
    }
}

/// A report request: date bounds plus optional project and language filters.
///
/// Query order is `from`, `to`, `project`, `language`; empty values are
/// left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub range: DateRange,
    pub project: Option<String>,
    pub language: Option<String>,
}

impl ReportQuery {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }

    /// Only count activity in `project`
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Only count activity in `language`
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn query_string(&self) -> String {
        let filters = [("project", &self.project), ("language", &self.language)]
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", name, urlencoding::encode(v)))
            });

        Some(self.range.query_string())
            .filter(|qs| !qs.is_empty())
            .into_iter()
            .chain(filters)
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query string to `path`, if there is one
    pub fn apply(&self, path: &str) -> String {
        let qs = self.query_string();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        }
    }
}

impl From<DateRange> for ReportQuery {
    fn from(range: DateRange) -> Self {
        Self::new(range)
    }
}
