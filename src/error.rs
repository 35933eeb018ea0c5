// SPDX-License-Identifier: MPL-2.0
use crate::application::port::CatalogError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(CatalogError::NotFound(_)) => "error-catalog-not-found",
            Error::Catalog(CatalogError::Malformed(_)) => "error-catalog-malformed",
            Error::Catalog(_) => "error-catalog-unavailable",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_converts() {
        let err: Error = CatalogError::NotFound("assets.toml".into()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::NotFound(_))));
        assert!(format!("{err}").contains("assets.toml"));
    }

    #[test]
    fn i18n_keys_follow_variant() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-io");
        assert_eq!(
            Error::Catalog(CatalogError::Malformed(String::new())).i18n_key(),
            "error-catalog-malformed"
        );
        assert_eq!(
            Error::Catalog(CatalogError::Io(String::new())).i18n_key(),
            "error-catalog-unavailable"
        );
    }
}
