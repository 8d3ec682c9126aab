use std::{
    env,
    path::{Path, PathBuf},
};

use tauri::{image::Image, AppHandle, Manager};

use crate::WINDOW_ICON_FILE;

/// Bundled resource first (Contents/Resources, /usr/lib/<app>, the install
/// dir on Windows), then next to the executable for unbundled runs.
pub fn window_icon_candidates(
    resource_dir: Option<PathBuf>,
    executable: Option<PathBuf>,
) -> Vec<PathBuf> {
    resource_dir
        .into_iter()
        .chain(executable.and_then(|path| path.parent().map(Path::to_path_buf)))
        .map(|dir| dir.join(WINDOW_ICON_FILE))
        .fold(Vec::new(), |mut candidates, path| {
            if !candidates.contains(&path) {
                candidates.push(path);
            }
            candidates
        })
}

pub(crate) fn load_icon_from<F>(path: &Path, log: F) -> Option<Image<'static>>
where
    F: Fn(&str),
{
    if !path.is_file() {
        log(&format!(
            "window icon not found at {}; keeping default icon",
            path.display()
        ));
        return None;
    }

    match Image::from_path(path) {
        Ok(icon) => Some(icon),
        Err(error) => {
            log(&format!(
                "failed to load window icon {}: {}; keeping default icon",
                path.display(),
                error
            ));
            None
        }
    }
}

/// Missing or broken icon files are tolerated; the bundled default stays.
pub fn load_window_icon<F>(app_handle: &AppHandle, log: F) -> Option<Image<'static>>
where
    F: Fn(&str),
{
    let resource_dir = match app_handle.path().resource_dir() {
        Ok(dir) => Some(dir),
        Err(error) => {
            log(&format!("failed to resolve resource dir for window icon: {error}"));
            None
        }
    };
    let executable = match env::current_exe() {
        Ok(path) => Some(path),
        Err(error) => {
            log(&format!("failed to resolve executable path for window icon: {error}"));
            None
        }
    };

    let candidates = window_icon_candidates(resource_dir, executable);
    let Some(path) = candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
    else {
        log("no location to look for a window icon; keeping default icon");
        return None;
    };
    load_icon_from(path, log)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs};

    use super::*;

    #[test]
    fn window_icon_candidates_prefer_resource_dir() {
        let candidates = window_icon_candidates(
            Some(PathBuf::from("/usr/lib/wl-whatsapp")),
            Some(PathBuf::from("/usr/bin/wl-whatsapp")),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/usr/lib/wl-whatsapp/icon.png"),
                PathBuf::from("/usr/bin/icon.png"),
            ]
        );
    }

    #[test]
    fn window_icon_candidates_cover_macos_bundle_layout() {
        let candidates = window_icon_candidates(
            Some(PathBuf::from("/Applications/WL-WhatsApp.app/Contents/Resources")),
            Some(PathBuf::from("/Applications/WL-WhatsApp.app/Contents/MacOS/wl-whatsapp")),
        );
        assert_eq!(
            candidates[0],
            PathBuf::from("/Applications/WL-WhatsApp.app/Contents/Resources/icon.png")
        );
    }

    #[test]
    fn window_icon_candidates_deduplicate_shared_dir() {
        let candidates = window_icon_candidates(
            Some(PathBuf::from("C:/Program Files/WL-WhatsApp")),
            Some(PathBuf::from("C:/Program Files/WL-WhatsApp/wl-whatsapp.exe")),
        );
        assert_eq!(
            candidates,
            vec![PathBuf::from("C:/Program Files/WL-WhatsApp/icon.png")]
        );
    }

    #[test]
    fn window_icon_candidates_empty_without_locations() {
        assert!(window_icon_candidates(None, None).is_empty());
    }

    #[test]
    fn load_icon_from_tolerates_missing_file() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let logged = RefCell::new(Vec::new());

        let icon = load_icon_from(&temp.path().join("icon.png"), |message: &str| {
            logged.borrow_mut().push(message.to_string())
        });

        assert!(icon.is_none());
        assert_eq!(logged.borrow().len(), 1);
        assert!(logged.borrow()[0].contains("not found"));
    }

    #[test]
    fn load_icon_from_tolerates_corrupt_file() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("icon.png");
        fs::write(&path, b"not a png").expect("write corrupt icon");

        assert!(load_icon_from(&path, |_| {}).is_none());
    }

    #[test]
    fn load_icon_from_decodes_bundled_png() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("icon.png");
        fs::write(&path, include_bytes!("../icons/icon.png")).expect("write icon");

        let icon = load_icon_from(&path, |_| {}).expect("bundled icon decodes");
        assert_eq!((icon.width(), icon.height()), (64, 64));
    }
}
