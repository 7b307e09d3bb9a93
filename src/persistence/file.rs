use super::{PersistenceError, PersistenceResult, TimetableStore, validate_timetable};
use crate::timetable::{Period, Timetable};
use crate::week;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

pub fn save_timetable_to_json<P: AsRef<Path>>(
    timetable: &Timetable,
    path: P,
) -> PersistenceResult<()> {
    validate_timetable(timetable)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, timetable)?;
    Ok(())
}

/// A missing file is an empty timetable, not an error.
pub fn load_timetable_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Timetable> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Timetable::new());
    }
    let file = File::open(path)?;
    let timetable: Timetable = serde_json::from_reader(file)?;
    validate_timetable(&timetable)?;
    Ok(timetable)
}

/// Whole-file JSON store over a fixed path. Each call reads or rewrites the
/// file in one operation; there is no locking, the last writer wins.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimetableStore for JsonFileStore {
    fn save_timetable(&self, timetable: &Timetable) -> PersistenceResult<()> {
        save_timetable_to_json(timetable, &self.path)
    }

    fn load_timetable(&self) -> PersistenceResult<Timetable> {
        load_timetable_from_json(&self.path)
    }
}

#[derive(Serialize, Deserialize)]
struct PeriodCsvRecord {
    day: String,
    start: String,
    end: String,
    subject: String,
}

/// Flat `day,start,end,subject` rows, week order by day, list order within.
pub fn export_week_to_csv<P: AsRef<Path>>(
    timetable: &Timetable,
    path: P,
) -> PersistenceResult<()> {
    validate_timetable(timetable)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for day in week::WEEKDAYS {
        if let Some(periods) = timetable.day(day) {
            for period in periods {
                writer.serialize(PeriodCsvRecord {
                    day: day.to_string(),
                    start: period.start.clone(),
                    end: period.end.clone(),
                    subject: period.subject.clone(),
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn import_week_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Timetable> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut days: BTreeMap<String, Vec<Period>> = BTreeMap::new();
    for record in reader.deserialize::<PeriodCsvRecord>() {
        let record = record?;
        if !week::is_weekday(&record.day) {
            return Err(PersistenceError::InvalidData(format!(
                "unknown day '{}'",
                record.day
            )));
        }
        days.entry(record.day)
            .or_default()
            .push(Period::new(record.start, record.end, record.subject));
    }

    if days.is_empty() {
        return Err(PersistenceError::InvalidData(
            "CSV file contained no periods".into(),
        ));
    }

    let mut timetable = Timetable::new();
    for (day, periods) in days {
        timetable.set_day(day, periods);
    }
    validate_timetable(&timetable)?;
    Ok(timetable)
}
