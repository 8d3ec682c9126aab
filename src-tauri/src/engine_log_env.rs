use std::env;

#[cfg(target_os = "windows")]
const ENGINE_LOG_OVERRIDES: &[(&str, &str)] =
    &[("WEBVIEW2_ADDITIONAL_BROWSER_ARGUMENTS", "--log-level=3")];

#[cfg(target_os = "linux")]
const ENGINE_LOG_OVERRIDES: &[(&str, &str)] = &[("GST_DEBUG", "0")];

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
const ENGINE_LOG_OVERRIDES: &[(&str, &str)] = &[];

fn pending_overrides<'a, P>(
    overrides: &'a [(&'a str, &'a str)],
    is_set: P,
) -> Vec<(&'a str, &'a str)>
where
    P: Fn(&str) -> bool,
{
    overrides
        .iter()
        .copied()
        .filter(|(key, _)| !is_set(*key))
        .collect()
}

/// Quiets webview engine diagnostics. Must run before the runtime starts.
pub fn suppress_engine_logs<F>(keep_engine_logs: bool, log: F)
where
    F: Fn(&str),
{
    if keep_engine_logs {
        log("engine diagnostics left at their defaults");
        return;
    }

    for (key, value) in pending_overrides(ENGINE_LOG_OVERRIDES, |key| env::var_os(key).is_some()) {
        env::set_var(key, value);
        log(&format!("set {key}={value} to quiet engine diagnostics"));
    }
}
