use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write rendered text verbatim to a file, or to stdout when no path is given
pub fn write_rendered(text: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, text),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()
        }
    }
}
