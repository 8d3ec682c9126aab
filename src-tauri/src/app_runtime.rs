use tauri::{webview::PageLoadEvent, Manager, RunEvent};

use crate::{
    append_desktop_log, append_startup_log, engine_log_env, logging, main_window,
    nav_menu_handler, shell_config::ShellConfig, shell_controller::ShellController,
    window_actions, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(logging::default_log_dir(), DESKTOP_LOG_FILE).display()
    ));

    let config = ShellConfig::from_env(append_startup_log);
    engine_log_env::suppress_engine_logs(config.keep_engine_logs, append_startup_log);
    append_startup_log(&format!(
        "target url: {} user agent: {}",
        config.target_url, config.user_agent
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            append_desktop_log("second instance requested, focusing main window");
            window_actions::focus_main_window(app, append_desktop_log);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(ShellController::default())
        .on_menu_event(|app, event| {
            nav_menu_handler::handle_nav_menu_event(app, event.id().as_ref())
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                main_window::handle_page_load_finished(
                    webview.app_handle(),
                    webview.label(),
                    payload.url(),
                    append_desktop_log,
                );
            }
        })
        .setup(move |app| {
            main_window::create_main_window(app.handle(), &config, append_startup_log)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::Exit = event {
                append_desktop_log("desktop process exiting");
            }
        });
}
