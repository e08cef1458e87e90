use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the `hbench` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_hbench<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = hbench_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run hbench failed: {}", err))
}

fn hbench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_hbench").map_or_else(
        || Err("CARGO_BIN_EXE_hbench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
