use crate::timetable::Timetable;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Whole-value persistence of the week's timetable.
pub trait TimetableStore {
    fn save_timetable(&self, timetable: &Timetable) -> PersistenceResult<()>;
    fn load_timetable(&self) -> PersistenceResult<Timetable>;
}

/// Presence check applied at the store boundary. Time strings are not
/// validated beyond being non-empty; lexical comparison handles the rest.
pub fn validate_timetable(timetable: &Timetable) -> PersistenceResult<()> {
    for (day, periods) in timetable.days() {
        for period in periods {
            if period.start.trim().is_empty()
                || period.end.trim().is_empty()
                || period.subject.trim().is_empty()
            {
                return Err(PersistenceError::InvalidData(format!(
                    "{day} has a period with an empty field"
                )));
            }
        }
    }
    Ok(())
}

pub mod file;

pub use file::{
    JsonFileStore, export_week_to_csv, import_week_from_csv, load_timetable_from_json,
    save_timetable_to_json,
};
