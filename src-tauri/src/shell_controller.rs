use std::sync::Mutex;

use url::Url;

use crate::{
    about_dialog::AboutInfo,
    dark_mode::DarkModeInjection,
    nav_actions::NavAction,
    nav_history::{NavigationHistory, NavigationIntent},
};

/// Navigation primitives of the embedded webview.
pub trait BrowserView {
    fn go_back(&self);
    fn go_forward(&self);
    fn reload(&self);
    /// Fire-and-forget: the page never reports an outcome back.
    fn run_script(&self, script: &str);
}

/// Host-side chrome around the webview: navigation toolbar and dialogs.
pub trait WindowChrome {
    fn set_back_enabled(&self, enabled: bool);
    fn set_forward_enabled(&self, enabled: bool);
    fn show_about(&self, info: &AboutInfo);
}

/// Wires toolbar actions and page-load completions to the webview and chrome.
///
/// All entry points run on the event-loop thread; the mutex only satisfies
/// Tauri's `Send + Sync` requirement for managed state.
#[derive(Debug, Default)]
pub struct ShellController {
    history: Mutex<NavigationHistory>,
    injection: DarkModeInjection,
    about: AboutInfo,
}

impl ShellController {
    pub fn handle_action<B, C, F>(&self, action: NavAction, browser: &B, chrome: &C, log: F)
    where
        B: BrowserView + ?Sized,
        C: WindowChrome + ?Sized,
        F: Fn(&str),
    {
        match action {
            NavAction::Back => {
                if self.begin(NavigationIntent::Back, &log) {
                    browser.go_back();
                } else {
                    log("back ignored: no earlier history entry");
                }
            }
            NavAction::Forward => {
                if self.begin(NavigationIntent::Forward, &log) {
                    browser.go_forward();
                } else {
                    log("forward ignored: no later history entry");
                }
            }
            NavAction::Reload => {
                self.begin(NavigationIntent::Reload, &log);
                browser.reload();
            }
            NavAction::About => chrome.show_about(&self.about),
        }
    }

    pub fn handle_page_load_finished<B, C, F>(&self, url: &Url, browser: &B, chrome: &C, log: F)
    where
        B: BrowserView + ?Sized,
        C: WindowChrome + ?Sized,
        F: Fn(&str),
    {
        match self.history.lock() {
            Ok(mut history) => history.finish_load(url),
            Err(error) => log(&format!("failed to lock navigation history: {error}")),
        }

        browser.run_script(&self.injection.script());
        self.sync_chrome(chrome, log);
    }

    /// Pushes the current back/forward availability to the chrome.
    pub fn sync_chrome<C, F>(&self, chrome: &C, log: F)
    where
        C: WindowChrome + ?Sized,
        F: Fn(&str),
    {
        let (can_go_back, can_go_forward) = match self.history.lock() {
            Ok(history) => (history.can_go_back(), history.can_go_forward()),
            Err(error) => {
                log(&format!("failed to lock navigation history: {error}"));
                (false, false)
            }
        };
        chrome.set_back_enabled(can_go_back);
        chrome.set_forward_enabled(can_go_forward);
    }

    fn begin<F>(&self, intent: NavigationIntent, log: F) -> bool
    where
        F: Fn(&str),
    {
        match self.history.lock() {
            Ok(mut history) => history.begin(intent),
            Err(error) => {
                log(&format!("failed to lock navigation history: {error}"));
                false
            }
        }
    }
}
