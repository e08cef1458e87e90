//! Report destinations: stdout by default, a plain-text file when configured.

use std::path::PathBuf;

use crate::error::SinkError;

/// Deliver the rendered report.
///
/// # Errors
///
/// Returns an error if the report file cannot be written; stdout delivery
/// is infallible.
pub(crate) async fn write_report(output: Option<&str>, lines: &[String]) -> Result<(), SinkError> {
    let body = lines.join("\n");
    if let Some(path) = output {
        return tokio::fs::write(path, body)
            .await
            .map_err(|err| SinkError::WriteReport {
                path: PathBuf::from(path),
                source: err,
            });
    }
    println!("{}", body);
    Ok(())
}
