use thiserror::Error;
use crate::error::BackupError;
use crate::scheme::GameScheme;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError{
    #[error("Rows should have the same length, but row {row:} has {found:} entries while {expected:} were expected")]
    RaggedRow{
        row: usize,
        expected: usize,
        found: usize,
    },
}
impl<S: GameScheme> From<DataError> for BackupError<S>{
    fn from(source: DataError) -> BackupError<S>{
        BackupError::Data{
            source,
        }
    }
}
