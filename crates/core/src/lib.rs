#![forbid(unsafe_code)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod model;
pub mod options;
pub mod settings;
pub mod time;

pub use dataset::{Dataset, DatasetError};
pub use error::Error;
pub use options::{OptionError, OptionSet};
pub use settings::{NumericRange, QuizSettings, SettingsError};
pub use time::Clock;
