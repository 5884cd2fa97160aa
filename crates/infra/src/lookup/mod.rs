//! Lookup catalogue sources

mod file_catalogue;

pub use file_catalogue::FileCatalogue;
