pub mod persistence;
pub mod resolver;
pub mod timetable;
pub mod week;

pub use persistence::{
    JsonFileStore, PersistenceError, PersistenceResult, TimetableStore, export_week_to_csv,
    import_week_from_csv, load_timetable_from_json, save_timetable_to_json, validate_timetable,
};
pub use resolver::{ClassStatus, current_and_next};
pub use timetable::{Period, Timetable};
