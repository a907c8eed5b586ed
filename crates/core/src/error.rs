use thiserror::Error;

use crate::dataset::DatasetError;
use crate::options::OptionError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Options(#[from] OptionError),
}
