use clap::{Parser, ValueEnum};

use crate::common::config::{ScanConfig, DEFAULT_SIZE_THRESHOLD};

/// fsaudit — disk usage and permission audit for a directory tree
#[derive(Parser, Debug)]
#[command(
    name = "fsaudit",
    version,
    about = "Analyze file system structure and usage",
    long_about = "fsaudit walks a directory tree and reports the space used per file type,\n\
                   the files above a size threshold and, optionally, world-writable files.",
    after_help = "EXAMPLES:\n  \
        fsaudit /var/log                       Usage per file type, files over 1 MiB\n  \
        fsaudit ~/Downloads -s 104857600       Only report files over 100 MiB\n  \
        fsaudit /srv/share -w                  Also list world-writable files\n  \
        fsaudit /data --format json            Machine-readable report"
)]
pub struct Cli {
    /// The directory path to analyze
    pub directory: String,

    /// The size threshold for large files (in bytes)
    #[arg(long, short = 's', value_name = "BYTES", default_value_t = DEFAULT_SIZE_THRESHOLD)]
    pub size_threshold: u64,

    /// Show world-writable files
    #[arg(long, short = 'w')]
    pub show_world_writable: bool,

    /// Inspect file contents when the extension is not recognised
    #[arg(long)]
    pub probe_content: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Build the scan settings from the parsed arguments
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new(&self.directory)
            .with_size_threshold(self.size_threshold)
            .with_world_writable(self.show_world_writable)
            .with_signature_probe(self.probe_content)
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
