// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print raw API records as JSON instead of the terminal summary
    #[arg(long = "json")]
    pub json: bool,

    /// Also write the JSON records to a file
    #[arg(long = "json-file", value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
