use tauri::{AppHandle, Manager, Theme, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    about_dialog::{self, AboutInfo},
    nav_actions::{NAV_MENU_BACK, NAV_MENU_FORWARD},
    nav_menu,
    shell_config::ShellConfig,
    shell_controller::{BrowserView, ShellController, WindowChrome},
    window_icon, NavigationMenuState, MAIN_WINDOW_LABEL, MAIN_WINDOW_POSITION, MAIN_WINDOW_SIZE,
    MAIN_WINDOW_TITLE,
};

pub(crate) struct MainWindowBrowser<'a, F>
where
    F: Fn(&str),
{
    window: &'a WebviewWindow,
    log: F,
}

impl<'a, F> MainWindowBrowser<'a, F>
where
    F: Fn(&str),
{
    pub(crate) fn new(window: &'a WebviewWindow, log: F) -> Self {
        Self { window, log }
    }

    fn eval_or_log(&self, script: &str, purpose: &str) {
        if let Err(error) = self.window.eval(script) {
            (self.log)(&format!("failed to dispatch {purpose} script: {error}"));
        }
    }
}

impl<F> BrowserView for MainWindowBrowser<'_, F>
where
    F: Fn(&str),
{
    fn go_back(&self) {
        self.eval_or_log("window.history.back()", "back");
    }

    fn go_forward(&self) {
        self.eval_or_log("window.history.forward()", "forward");
    }

    fn reload(&self) {
        self.eval_or_log("window.location.reload()", "reload");
    }

    fn run_script(&self, script: &str) {
        self.eval_or_log(script, "page");
    }
}

pub(crate) struct MainWindowChrome<'a, F>
where
    F: Fn(&str),
{
    window: &'a WebviewWindow,
    menu: Option<&'a NavigationMenuState>,
    log: F,
}

impl<'a, F> MainWindowChrome<'a, F>
where
    F: Fn(&str),
{
    pub(crate) fn new(
        window: &'a WebviewWindow,
        menu: Option<&'a NavigationMenuState>,
        log: F,
    ) -> Self {
        Self { window, menu, log }
    }
}

impl<F> WindowChrome for MainWindowChrome<'_, F>
where
    F: Fn(&str),
{
    fn set_back_enabled(&self, enabled: bool) {
        if let Some(menu) = self.menu {
            nav_menu::set_menu_enabled_safe(&menu.back_item, enabled, NAV_MENU_BACK, &self.log);
        }
    }

    fn set_forward_enabled(&self, enabled: bool) {
        if let Some(menu) = self.menu {
            nav_menu::set_menu_enabled_safe(
                &menu.forward_item,
                enabled,
                NAV_MENU_FORWARD,
                &self.log,
            );
        }
    }

    fn show_about(&self, info: &AboutInfo) {
        about_dialog::show_about_dialog(self.window, info);
    }
}

/// Builds the navigation menu and the single webview window pointed at the target URL.
pub fn create_main_window<F>(
    app_handle: &AppHandle,
    config: &ShellConfig,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str) + Copy,
{
    let (menu, menu_state) = nav_menu::build_navigation_menu(app_handle)?;
    if !app_handle.manage(menu_state) {
        log("navigation menu state already exists, skipping manage");
    }

    let (x, y) = MAIN_WINDOW_POSITION;
    let (width, height) = MAIN_WINDOW_SIZE;
    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(config.target_url.clone()),
    )
    .title(MAIN_WINDOW_TITLE)
    .position(x, y)
    .inner_size(width, height)
    .user_agent(&config.user_agent)
    .theme(Some(Theme::Dark))
    .background_color(config.palette.window.to_window_color())
    .initialization_script(&config.palette.initialization_script())
    .menu(menu)
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;
    log(&format!("main window created for {}", config.target_url));

    if let Some(icon) = window_icon::load_window_icon(app_handle, log) {
        if let Err(error) = window.set_icon(icon) {
            log(&format!("failed to apply window icon: {error}"));
        }
    }

    let menu_state = app_handle.state::<NavigationMenuState>();
    let controller = app_handle.state::<ShellController>();
    controller.sync_chrome(
        &MainWindowChrome::new(&window, Some(menu_state.inner()), log),
        log,
    );
    Ok(())
}

pub fn handle_page_load_finished<F>(app_handle: &AppHandle, label: &str, url: &Url, log: F)
where
    F: Fn(&str) + Copy,
{
    if label != MAIN_WINDOW_LABEL {
        return;
    }
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("page-load handling skipped: main window not found");
        return;
    };

    let controller = app_handle.state::<ShellController>();
    let menu_state = app_handle.try_state::<NavigationMenuState>();
    controller.handle_page_load_finished(
        url,
        &MainWindowBrowser::new(&window, log),
        &MainWindowChrome::new(&window, menu_state.as_deref(), log),
        log,
    );
}
