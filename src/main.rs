mod app;
mod args;
mod entry;
mod error;
mod hosts;
mod http;
mod metrics;
mod sinks;
mod system;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
