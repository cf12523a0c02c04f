use clap::Parser;

/// Filter CSV transaction logs by a half-open time window
#[derive(Parser, Debug)]
#[command(name = "trx-filter")]
#[command(
    about = "Filter CSV transaction logs by a half-open time window [start, end)",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing the numerically-prefixed CSV transaction logs
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Directory containing CSV files"
    )]
    pub directory: String,

    /// Inclusive start of the time window
    #[arg(
        short = 's',
        long = "start",
        value_name = "START",
        help = "Start time (RFC 3339, inclusive)"
    )]
    pub start: String,

    /// Exclusive end of the time window
    #[arg(
        short = 'e',
        long = "end",
        value_name = "END",
        help = "End time (RFC 3339, exclusive)"
    )]
    pub end: String,
}
