use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// The text travels in the query string, so keep it well below URL limits.
const MAX_INPUT_SIZE: usize = 64 * 1024;

/// Path value that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

pub struct InputReader;

impl InputReader {
    /// Reads the text to translate from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &str) -> Result<String> {
        if path == STDIN_PATH {
            Self::read_stdin()
        } else {
            Self::read_file(path)
        }
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} KB) exceeds maximum allowed size (64 KB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size exceeds maximum allowed size (64 KB).\n\n\
                     Consider splitting the input into smaller parts."
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
