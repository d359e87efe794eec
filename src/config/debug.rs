//! Debugging feature flags.

pub struct LogFlags {
    /// Log every bake-table lookup (noisy)
    pub log_bake_lookup: bool,

    /// Log each band the shader emits and why it stopped
    pub log_shader: bool,

    /// Log dataset file loads
    pub log_loader: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_bake_lookup: false,
    log_shader: false,
    log_loader: false,
    log_performance: false,
};
