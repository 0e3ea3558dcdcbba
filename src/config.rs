// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use sift_lines_engine::config::{Config, ConfigBuilder, OutputTargets};
use sift_lines_engine::options::{self as engine_options, WriteMode};
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let write_mode = if args.output.append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        };
        let stat_format: engine_options::StatFormat = args.stats.stat_format.into();

        ConfigBuilder::default()
            .inputs(args.inputs)
            .output_dir(args.output.output.unwrap_or_else(|| PathBuf::from(".")))
            .prefix(args.output.prefix.unwrap_or_default())
            .write_mode(write_mode)
            .short_stats(args.stats.short_stat)
            .full_stats(args.stats.full_stat)
            .stat_format(stat_format)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::StatFormat, engine_options::StatFormat, Text, Json);
