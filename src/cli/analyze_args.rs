// Assessment request arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::client::AnalyzeParams;
use clap::Args;

/// Options forwarded to the analyze call
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Publish results on the public SSL Labs boards
    #[arg(long = "publish")]
    pub publish: bool,

    /// Ignore cached results and start a new assessment
    #[arg(long = "start-new", conflicts_with = "from_cache")]
    pub start_new: bool,

    /// Use cached results only; never start a new assessment
    #[arg(long = "from-cache")]
    pub from_cache: bool,

    /// Maximum age of cached results, in hours
    #[arg(long = "max-age", value_name = "HOURS")]
    pub max_age: Option<u32>,

    /// Include endpoint details in every analyze response
    #[arg(long = "all")]
    pub all: bool,

    /// Continue even when the certificate doesn't match the hostname
    #[arg(long = "ignore-mismatch")]
    pub ignore_mismatch: bool,
}

impl AnalyzeArgs {
    pub fn to_params(&self) -> AnalyzeParams {
        AnalyzeParams {
            publish: self.publish,
            start_new: self.start_new,
            from_cache: self.from_cache,
            max_age: self.max_age,
            all: self.all,
            ignore_mismatch: self.ignore_mismatch,
        }
    }
}
