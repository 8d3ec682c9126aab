use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DESKTOP_LOG_FILE, DESKTOP_STATE_DIR, LOG_DIR_ENV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogScope {
    Startup,
    Desktop,
}

impl LogScope {
    fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Desktop => "desktop",
        }
    }
}

pub fn default_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        let path = PathBuf::from(dir.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(DESKTOP_STATE_DIR).join("logs"))
}

pub fn resolve_desktop_log_path(log_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    log_dir
        .unwrap_or_else(|| env::temp_dir().join("wl-whatsapp"))
        .join(file_name)
}

fn format_log_line(scope: LogScope, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, false),
        scope.as_str(),
        message
    )
}

pub(crate) fn write_log_line(path: &Path, scope: LogScope, message: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    file.write_all(format_log_line(scope, message).as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_log(scope: LogScope, message: &str) {
    let path = resolve_desktop_log_path(default_log_dir(), DESKTOP_LOG_FILE);
    if cfg!(debug_assertions) {
        eprintln!("[{}] {}", scope.as_str(), message);
    }
    // A broken log sink must never take the shell down.
    let _ = write_log_line(&path, scope, message);
}

pub fn append_startup_log(message: &str) {
    append_log(LogScope::Startup, message);
}

pub fn append_desktop_log(message: &str) {
    append_log(LogScope::Desktop, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_prefers_explicit_dir() {
        let dir = PathBuf::from("/var/log/wl");
        assert_eq!(
            resolve_desktop_log_path(Some(dir.clone()), "desktop.log"),
            dir.join("desktop.log")
        );
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert!(path.starts_with(env::temp_dir()));
        assert!(path.ends_with("desktop.log"));
    }

    #[test]
    fn write_log_line_appends_scoped_lines() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("nested").join("desktop.log");

        write_log_line(&path, LogScope::Startup, "first").expect("write first line");
        write_log_line(&path, LogScope::Desktop, "second").expect("write second line");

        let contents = fs::read_to_string(&path).expect("read log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[startup] first"));
        assert!(lines[1].ends_with("[desktop] second"));
        assert!(lines[0].starts_with('['));
    }
}
