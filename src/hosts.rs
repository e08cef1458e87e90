//! Target list resolution and validation.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// Accepted target shape: https scheme, host of letters/digits/dots/hyphens,
/// optional path with no whitespace.
static HOST_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^https://[A-Za-z0-9.-]+(?:/[^\s]*)?$").ok());

pub(crate) fn validate_host(url: &str) -> bool {
    HOST_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(url))
}

/// Resolve the target set from exactly one of the two input modes.
///
/// Inline entries are split on commas without trimming, so padded entries
/// fail validation with the offending string. File entries are trimmed and
/// blank lines skipped. The resolved list is de-duplicated preserving
/// first-seen order.
///
/// # Errors
///
/// Returns a configuration error when both or neither source is given, when
/// the host file cannot be read, or when the resolved list is empty; returns
/// a validation error naming the first malformed target.
pub(crate) fn resolve_hosts(hosts: Option<&str>, file: Option<&str>) -> AppResult<Vec<String>> {
    let raw: Vec<String> = match (hosts, file) {
        (Some(_), Some(_)) | (None, None) => {
            return Err(AppError::config(ConfigError::HostSourceRequired));
        }
        (Some(list), None) => list.split(',').map(str::to_owned).collect(),
        (None, Some(path)) => load_hosts_from_file(path)?,
    };

    for host in &raw {
        if !validate_host(host) {
            return Err(AppError::validation(ValidationError::InvalidHostFormat {
                value: host.clone(),
            }));
        }
    }

    let mut resolved: Vec<String> = Vec::with_capacity(raw.len());
    for host in raw {
        if !resolved.contains(&host) {
            resolved.push(host);
        }
    }

    if resolved.is_empty() {
        return Err(AppError::config(ConfigError::EmptyHostList));
    }

    Ok(resolved)
}

fn load_hosts_from_file(path: &str) -> AppResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadHostsFile {
            path: PathBuf::from(path),
            source: err,
        })
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
