//! GitHub Actions step outputs.
//!
//! The runner exposes a file path in `GITHUB_OUTPUT`; each output is appended
//! as `key=value`, or as a heredoc block when the value spans lines:
//!
//! ```text
//! name<<ghdelimiter_3f2a...
//! line one
//! line two
//! ghdelimiter_3f2a...
//! ```

use std::env;
use std::io::Write;
use std::path::Path;

use uuid::Uuid;

use crate::defaults::{self, OutputConfig};
use crate::error::{Error, Result};
use crate::io;

/// Append outputs to the file named by the configured environment variable
/// (`GITHUB_OUTPUT` by default).
pub fn set_output<I, K, V>(data: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    set_output_with(&defaults::load_defaults().output, data)
}

/// [`set_output`] with an explicit output configuration instead of the one
/// loaded from com.json.
pub fn set_output_with<I, K, V>(config: &OutputConfig, data: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let path = env::var(&config.env_var).unwrap_or_default();
    if path.is_empty() {
        return Err(Error::output_not_configured(config.env_var.clone()));
    }

    write_entries(Path::new(&path), data, &config.delimiter_prefix)
}

/// Append outputs to an existing file at `path`.
pub fn set_output_to<I, K, V>(path: &Path, data: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let prefix = defaults::load_defaults().output.delimiter_prefix;
    write_entries(path, data, &prefix)
}

fn write_entries<I, K, V>(path: &Path, data: I, delimiter_prefix: &str) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut file = io::open_append(path, &format!("failed to open file {}", path.display()))?;

    let mut written = 0usize;
    for (key, value) in data {
        let (key, value) = (key.as_ref(), value.as_ref());
        let entry = if value.contains('\n') {
            format_entry(key, value, Some(&generate_delimiter(delimiter_prefix, value)))
        } else {
            format_entry(key, value, None)
        };

        file.write_all(entry.as_bytes()).map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("failed to write to file {}", path.display())),
            )
        })?;
        written += 1;
    }

    log_status!("gh", "Wrote {} output(s) to {}", written, path.display());
    Ok(())
}

/// Format one output entry: `key=value\n`, or a heredoc block when a
/// delimiter is given.
pub fn format_entry(key: &str, value: &str, delimiter: Option<&str>) -> String {
    match delimiter {
        Some(delim) => format!("{}<<{}\n{}\n{}\n", key, delim, value, delim),
        None => format!("{}={}\n", key, value),
    }
}

/// A random `<prefix>_<hex>` delimiter that does not occur in `value`.
fn generate_delimiter(prefix: &str, value: &str) -> String {
    loop {
        let delimiter = format!("{}_{}", prefix, Uuid::new_v4().simple());
        if !value.contains(&delimiter) {
            return delimiter;
        }
    }
}
