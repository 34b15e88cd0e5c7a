//! Console logging walkthrough.
//!
//! ```sh
//! cargo run --example console
//! ```

use std::sync::Arc;

use fmtlog::{args, Arg, ConsoleBackend, DefaultLogger, Logger, Severity};

#[tokio::main]
async fn main() -> fmtlog::LogResult<()> {
    let logger = DefaultLogger::new(Arc::new(ConsoleBackend::stdout()));

    logger
        .info("User {} logged in from {}", args!["alice", "10.0.0.1"])
        .await?;

    // Conditional detail: suppressed at info under the default threshold,
    // and the closure never runs.
    logger
        .info(
            "Cache stats: {?:}",
            vec![Arg::lazy(|| {
                println!("(computing cache stats...)");
                "hits=9120 misses=311"
            })],
        )
        .await?;

    // Carried on the error line, computed exactly once.
    logger
        .error(
            "Cache stats: {?:}",
            vec![Arg::lazy(|| {
                println!("(computing cache stats...)");
                "hits=9120 misses=311"
            })],
        )
        .await?;

    // Runtime adjustment: silence everything more verbose than warn.
    logger.filter().set_min_severity(Some(Severity::Warn));
    logger.debug("you will not see this", args![]).await?;
    logger.warn("but you will see {}", args!["this"]).await?;

    Ok(())
}
