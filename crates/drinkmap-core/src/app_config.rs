/// Runtime settings for the drinkmap binaries.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Pause inserted between replayed fragments, in milliseconds.
    pub replay_delay_ms: u64,
    pub pretty_json: bool,
    /// Print live snapshots to stderr while a replay is streaming.
    pub show_live: bool,
}
