//! Hot-reloading the filter from a config file.
//!
//! ```sh
//! cargo run --example reload
//! ```
//!
//! While this runs, edit `fmtlog.toml` in the working directory (e.g. set
//! `min_severity = "warn"`) and watch the output change within a couple of
//! seconds.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use fmtlog::{args, ConfigWatcher, ConsoleBackend, DefaultLogger, Logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new("fmtlog.toml");
    if !path.exists() {
        std::fs::write(path, "min_severity = \"deep_trace\"\n")?;
        println!("wrote {} - edit it while this runs", path.display());
    }

    let logger = DefaultLogger::new(Arc::new(ConsoleBackend::stdout()));

    let watcher = ConfigWatcher::new(path, logger.filter());
    let _watcher = watcher.run()?;

    let mut tick = 0u64;
    loop {
        logger.info("tick {}", args![tick]).await?;
        logger.debug("debug detail for tick {}", args![tick]).await?;
        tick += 1;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}
