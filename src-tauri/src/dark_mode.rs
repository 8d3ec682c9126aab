use crate::{DARK_MODE_MARKER_CLASS, DARK_MODE_TOGGLE_SELECTOR};

/// Asks the hosted page to switch itself to its dark theme.
///
/// The rendered script is fire-and-forget: it never reports back, and a
/// missing toggle (changed markup, page still hydrating) leaves the page as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DarkModeInjection {
    pub marker_class: &'static str,
    pub toggle_selector: &'static str,
}

impl Default for DarkModeInjection {
    fn default() -> Self {
        Self {
            marker_class: DARK_MODE_MARKER_CLASS,
            toggle_selector: DARK_MODE_TOGGLE_SELECTOR,
        }
    }
}

impl DarkModeInjection {
    pub fn script(&self) -> String {
        // `{:?}` renders a double-quoted, escaped literal that is valid JS.
        format!(
            r#"(function () {{
  try {{
    var root = document.documentElement;
    if (root && !root.classList.contains({marker:?})) {{
      var toggle = document.querySelector({selector:?});
      if (toggle) {{
        toggle.click();
      }}
    }}
  }} catch (_) {{}}
}})();"#,
            marker = self.marker_class,
            selector = self.toggle_selector,
        )
    }
}
