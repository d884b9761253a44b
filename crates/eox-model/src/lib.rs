//! Core data types shared by the EoX report pipeline stages.

pub mod record;
pub mod serial;

pub use record::{DATE_COLUMNS, DateColumn, DateValue, EoxRecord, LifecycleDates};
pub use serial::{MAX_SERIAL_LEN, filter_serials, is_valid_serial};
