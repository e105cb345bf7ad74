use thiserror::Error;

/// Reasons the widget refuses to mount. Nothing is wired when one occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("no global window object")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("a required stopwatch element could not be found in the DOM: {role} (#{id})")]
    MissingElement { role: &'static str, id: String },

    #[error("stopwatch {role} (#{id}) is not a <button> element")]
    NotAButton { role: &'static str, id: String },

    #[error("failed to wire stopwatch handlers: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SetupError::MissingElement {
            role: "lap list",
            id: "laps-list".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "a required stopwatch element could not be found in the DOM: lap list (#laps-list)"
        );

        let err = SetupError::NotAButton {
            role: "start/stop button",
            id: "start-stop-btn".to_string(),
        };
        assert_eq!(err.to_string(), "stopwatch start/stop button (#start-stop-btn) is not a <button> element");
        assert_eq!(SetupError::MissingWindow.to_string(), "no global window object");
    }
}
