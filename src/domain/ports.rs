use crate::utils::error::Result;

/// Receives rejected ingestion lines: 1-based line number and raw content.
pub trait LoadErrorSink {
    fn on_error(&mut self, line: usize, raw: &str);
}

impl<F> LoadErrorSink for F
where
    F: FnMut(usize, &str),
{
    fn on_error(&mut self, line: usize, raw: &str) {
        self(line, raw)
    }
}

/// File access for the command line adapter. The engine never touches it.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
