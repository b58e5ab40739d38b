use cd_defs::ProgressSink;

/// Writes progress lines to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn write(&self, line: &str) {
        println!("{}", line);
    }
}
