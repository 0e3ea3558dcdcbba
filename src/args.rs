// src/args.rs
use crate::options::StatFormat;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sift_lines",
    version = crate::VERSION,
    about = "Sort lines of text files into integers, floats and strings",
    after_help = "Example:\n  sift_lines -o out -p run1_ -s -f -a in1.txt in2.txt"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub stats: StatOptions,

    /// Input files, read line by line in turn
    #[arg(value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct OutputOptions {
    /// Directory for the output files (default: current directory)
    #[arg(short = 'o', long = "output", value_hint = ValueHint::DirPath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Prefix for the output file names
    #[arg(short = 'p', long = "prefix", help_heading = "Output")]
    pub prefix: Option<String>,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a', long = "add", help_heading = "Output")]
    pub append: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StatOptions {
    /// Print short statistics (counts only)
    #[arg(short = 's', long = "shortStat", help_heading = "Statistics")]
    pub short_stat: bool,

    /// Print full statistics
    #[arg(short = 'f', long = "fullStat", help_heading = "Statistics")]
    pub full_stat: bool,

    /// Format of the printed statistics
    #[arg(long, value_enum, default_value = "text", help_heading = "Statistics")]
    pub stat_format: StatFormat,
}
