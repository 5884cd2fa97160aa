//! Conversions from external infrastructure errors into domain errors.

use autooptix_domain::AutoOptixError;
use calamine::Error as WorkbookError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AutoOptixError);

impl From<InfraError> for AutoOptixError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AutoOptixError> for InfraError {
    fn from(value: AutoOptixError) -> Self {
        InfraError(value)
    }
}

trait IntoAutoOptixError {
    fn into_autooptix(self) -> AutoOptixError;
}

/* -------------------------------------------------------------------------- */
/* calamine::Error → AutoOptixError */
/* -------------------------------------------------------------------------- */

impl IntoAutoOptixError for WorkbookError {
    fn into_autooptix(self) -> AutoOptixError {
        match self {
            WorkbookError::Io(err) => AutoOptixError::Io(format!("failed to read workbook: {err}")),
            WorkbookError::Msg(msg) => AutoOptixError::Spreadsheet(msg.to_string()),
            other => AutoOptixError::Spreadsheet(other.to_string()),
        }
    }
}

impl From<WorkbookError> for InfraError {
    fn from(value: WorkbookError) -> Self {
        InfraError(value.into_autooptix())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → AutoOptixError */
/* -------------------------------------------------------------------------- */

impl IntoAutoOptixError for toml::de::Error {
    fn into_autooptix(self) -> AutoOptixError {
        AutoOptixError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_autooptix())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
