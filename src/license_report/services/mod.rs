mod framing_trimmer;
mod output_file_resolver;

pub use framing_trimmer::FramingTrimmer;
pub use output_file_resolver::OutputFileResolver;
