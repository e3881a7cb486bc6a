//! CLI-facing options for the protocol server (spec.md §4.9).

use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct EngineOptions {
    /// Passed straight to `flexi_logger`'s env-or-str constructor.
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// The largest search depth `bestmove depth <d>` will accept. Chosen by
    /// the embedder at process start, not negotiable over the wire.
    #[arg(long, default_value_t = 40)]
    pub max_depth_ceiling: usize,
}
