use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::collections::CollectionsError;
use crate::workflows::intake::IntakeError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Intake(IntakeError),
    Collections(CollectionsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Intake(err) => write!(f, "intake error: {}", err),
            AppError::Collections(err) => write!(f, "allocation error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Collections(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

impl From<CollectionsError> for AppError {
    fn from(value: CollectionsError) -> Self {
        Self::Collections(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::collections::ConfigurationError;
    use std::error::Error;

    #[test]
    fn collections_errors_keep_their_category() {
        let error = AppError::from(CollectionsError::from(ConfigurationError::NoAgencies));
        assert_eq!(
            error.to_string(),
            "allocation error: configuration error: at least one agency is required"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn intake_failures_chain_to_the_io_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "cases.csv");
        let error = AppError::from(IntakeError::from(io));

        assert!(error.to_string().starts_with("intake error: "));
        let intake = error.source().expect("intake source");
        assert!(intake.source().is_some());
    }
}
