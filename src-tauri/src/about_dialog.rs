use tauri::WebviewWindow;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::{ABOUT_DIALOG_TITLE, APP_AUTHOR, APP_DISPLAY_NAME, APP_DISPLAY_VERSION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub title: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self {
            title: ABOUT_DIALOG_TITLE,
            name: APP_DISPLAY_NAME,
            version: APP_DISPLAY_VERSION,
            author: APP_AUTHOR,
        }
    }
}

impl AboutInfo {
    pub fn body(&self) -> String {
        format!(
            "{}\nVersion: {}\nAuthor: {}",
            self.name, self.version, self.author
        )
    }
}

/// Modal to `window`. Returns immediately; the event loop keeps running
/// until the user dismisses the dialog.
pub fn show_about_dialog(window: &WebviewWindow, info: &AboutInfo) {
    window
        .dialog()
        .message(info.body())
        .title(info.title)
        .kind(MessageDialogKind::Info)
        .parent(window)
        .show(|_| {});
}

#[cfg(test)]
mod tests {
    use super::AboutInfo;

    #[test]
    fn about_body_names_app_version_and_author() {
        let body = AboutInfo::default().body();
        assert_eq!(body, "WL-WhatsApp\nVersion: 1.0\nAuthor: Vidyut Prabakaran");
        assert!(body.contains("WL-WhatsApp"));
        assert!(body.contains("Version: 1.0"));
        assert!(body.contains("Vidyut Prabakaran"));
    }

    #[test]
    fn about_title_is_fixed() {
        assert_eq!(AboutInfo::default().title, "About WhatsApp Viewer");
    }
}
