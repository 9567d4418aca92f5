//! Logging setup.
//!
//! The terminal is owned by the interface while the application runs, so log records cannot go to
//! standard error. They are appended to a file instead, and only when the user asks for one.

use std::{fs::OpenOptions, io::Write as _, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

/// Installs the global logger writing into `path`.
///
/// Without a path no logger is installed and every `log` macro stays a no-op. The filter comes
/// from the `RUST_LOG` environment variable and defaults to `info`.
///
/// # Errors
///
/// - [`std::io::Error`] when the log file cannot be opened.
/// - [`log::SetLoggerError`] when a global logger is already installed.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    log::info!("logging to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_path() {
        assert!(init(None).is_ok(), "no path means no logger and no error");
    }

    #[test]
    fn test_init_creates_file() {
        let path = std::env::temp_dir().join(format!("astarium-{}.log", std::process::id()));

        let result = init(Some(&path));

        assert!(result.is_ok(), "the first logger should install");
        assert!(path.exists(), "the log file should be created");

        let _ = std::fs::remove_file(&path);
    }
}
