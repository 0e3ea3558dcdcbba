use crate::options::{Category, StatFormat, WriteMode};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub prefix: String,
    #[builder(default)]
    pub write_mode: WriteMode,

    #[builder(default)]
    pub short_stats: bool,
    #[builder(default)]
    pub full_stats: bool,
    #[builder(default)]
    pub stat_format: StatFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            write_mode: WriteMode::Overwrite,
            short_stats: false,
            full_stats: false,
            stat_format: StatFormat::Text,
        }
    }
}

/// Output file path of every category, fixed before the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTargets {
    pub integers: PathBuf,
    pub floats: PathBuf,
    pub strings: PathBuf,
}

impl OutputTargets {
    /// `<output_dir>/<prefix><category file name>` for each category.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let path_for = |category: Category| {
            config
                .output_dir
                .join(format!("{}{}", config.prefix, category.file_name()))
        };
        Self {
            integers: path_for(Category::Integer),
            floats: path_for(Category::Float),
            strings: path_for(Category::String),
        }
    }

    #[must_use]
    pub fn path(&self, category: Category) -> &PathBuf {
        match category {
            Category::Integer => &self.integers,
            Category::Float => &self.floats,
            Category::String => &self.strings,
        }
    }
}
