/// Status lines routed through `tracing` under the `tally::status`
/// target, which the CLI formatter renders with a result symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "tally::status", $($arg)*)
    };
}
