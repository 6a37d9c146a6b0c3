pub mod generator_options;
pub mod report_document;

pub use generator_options::{
    GeneratorOptions, DEFAULT_REPORT_FILE, GENERATOR_MODULE, GENERATOR_REQUIREMENT,
};
pub use report_document::{LineEnding, ReportDocument};
