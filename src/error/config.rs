use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Provide exactly one of --hosts or --file.")]
    HostSourceRequired,
    #[error("Failed to read host list '{path}': {source}")]
    ReadHostsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Host list is empty.")]
    EmptyHostList,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
