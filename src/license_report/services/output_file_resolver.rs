use crate::license_report::domain::DEFAULT_REPORT_FILE;

const SHORT_OPTION: &str = "-o";
const LONG_OPTION_NAME: &str = "output-file";

/// OutputFileResolver - Finds the report file name among generator arguments
///
/// The generator decides where the report goes from its own `-o` /
/// `--output-file` option, so the hook reads the same option back out of
/// the argument list instead of keeping a second source of truth.
///
/// Accepted spellings follow argparse: `-o FILE`, `-oFILE`, `-o=FILE`,
/// `--output-file FILE`, `--output-file=FILE`, and any abbreviation of the
/// long option such as `--output FILE` or `--out=FILE`. When the option
/// appears more than once the last occurrence wins.
pub struct OutputFileResolver;

impl OutputFileResolver {
    pub fn resolve(args: &[String]) -> String {
        let mut resolved: Option<&str> = None;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if arg == "--" {
                break;
            }
            match Self::match_option(arg) {
                Some(Some(value)) => resolved = Some(value),
                Some(None) => {
                    if let Some(value) = iter.next() {
                        resolved = Some(value.as_str());
                    }
                }
                None => {}
            }
        }

        resolved
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_REPORT_FILE)
            .to_string()
    }

    /// `None` if `arg` is not the output option, `Some(None)` if its value
    /// is the next argument, `Some(Some(value))` if the value is attached
    fn match_option(arg: &str) -> Option<Option<&str>> {
        if let Some(long) = arg.strip_prefix("--") {
            let (name, value) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            let is_abbreviation = !name.is_empty() && LONG_OPTION_NAME.starts_with(name);
            return is_abbreviation.then_some(value);
        }

        let attached = arg.strip_prefix(SHORT_OPTION)?;
        if attached.is_empty() {
            Some(None)
        } else {
            Some(Some(attached.strip_prefix('=').unwrap_or(attached)))
        }
    }
}
