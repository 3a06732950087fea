use std::fmt;
use std::str::FromStr;

/// Status category of a job, controls the bar color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProgressStatus {
    #[default]
    Info,
    Danger,
    Success,
    Warning,
    Primary,
}

impl ProgressStatus {
    pub const ALL: [ProgressStatus; 5] = [
        ProgressStatus::Info,
        ProgressStatus::Danger,
        ProgressStatus::Success,
        ProgressStatus::Warning,
        ProgressStatus::Primary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStatus::Info => "info",
            ProgressStatus::Danger => "danger",
            ProgressStatus::Success => "success",
            ProgressStatus::Warning => "warning",
            ProgressStatus::Primary => "primary",
        }
    }

    /// Color modifier class, e.g. `progress-bar-info`.
    pub fn css_class(self) -> String {
        format!("progress-bar-{}", self.as_str())
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(String);

impl ParseStatusError {
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown progress status '{}' (expected one of info, danger, success, warning, primary)",
            self.0
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for ProgressStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProgressStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
