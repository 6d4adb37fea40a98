use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputParams {
    /// Emit machine-readable JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable tier colors in table output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}
