pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "WhatsApp Web Viewer";
pub const MAIN_WINDOW_POSITION: (f64, f64) = (100.0, 100.0);
pub const MAIN_WINDOW_SIZE: (f64, f64) = (1200.0, 800.0);
pub const WINDOW_ICON_FILE: &str = "icon.png";

pub const DEFAULT_TARGET_URL: &str = "https://web.whatsapp.com/";
pub const TARGET_URL_ENV: &str = "WL_WHATSAPP_URL";

// Desktop Chrome identity; the target site warns about unsupported browsers otherwise.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const USER_AGENT_ENV: &str = "WL_WHATSAPP_USER_AGENT";

pub const ENGINE_LOGS_ENV: &str = "WL_WHATSAPP_ENGINE_LOGS";
pub const LOG_DIR_ENV: &str = "WL_WHATSAPP_LOG_DIR";
pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const DESKTOP_STATE_DIR: &str = ".wl-whatsapp";

pub const DARK_MODE_MARKER_CLASS: &str = "dark";
pub const DARK_MODE_TOGGLE_SELECTOR: &str = r#"button[data-testid="menu-dark-mode"]"#;

pub const ABOUT_DIALOG_TITLE: &str = "About WhatsApp Viewer";
pub const APP_DISPLAY_NAME: &str = "WL-WhatsApp";
pub const APP_DISPLAY_VERSION: &str = "1.0";
pub const APP_AUTHOR: &str = "Vidyut Prabakaran";
