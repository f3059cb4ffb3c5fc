use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trx-gateway")]
#[command(about = "Partner transaction gateway - validates and prices signed submissions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Load the configuration, print a report and exit
    Config,
}
