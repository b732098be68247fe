use thiserror::Error;

/// Errors that can occur during analysis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The day/month/year triple does not name a real calendar day.
    #[error("Invalid calendar date: {day:02}-{month:02}-{year}")]
    InvalidCalendarDate {
        /// Day of month as written.
        day: u32,
        /// Month number as written.
        month: u32,
        /// Year after two-digit windowing.
        year: i32,
    },
    /// The derived age falls outside the accepted range.
    #[error("Implausible age: {0}")]
    ImplausibleAge(i32),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
