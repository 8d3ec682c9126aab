use tauri::window::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_window_color(self) -> Color {
        Color(self.0, self.1, self.2, 255)
    }
}

/// Colors for every role the shell paints, instead of inheriting the OS theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DarkPalette {
    pub window: Rgb,
    pub window_text: Rgb,
    pub base: Rgb,
    pub alternate_base: Rgb,
    pub text: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub link: Rgb,
    pub highlight: Rgb,
    pub highlighted_text: Rgb,
}

impl Default for DarkPalette {
    fn default() -> Self {
        Self {
            window: Rgb(53, 53, 53),
            window_text: Rgb(255, 255, 255),
            base: Rgb(42, 42, 42),
            alternate_base: Rgb(66, 66, 66),
            text: Rgb(255, 255, 255),
            button: Rgb(53, 53, 53),
            button_text: Rgb(255, 255, 255),
            link: Rgb(42, 130, 218),
            highlight: Rgb(42, 130, 218),
            highlighted_text: Rgb(0, 0, 0),
        }
    }
}

impl DarkPalette {
    /// Fallback styling for pages that leave these elements unstyled (engine
    /// error pages, bare documents). `:where()` keeps specificity at zero so
    /// any rule of the hosted page wins.
    fn stylesheet(&self) -> String {
        format!(
            ":root{{color-scheme:dark;}}\
             :where(html){{background-color:{window};color:{window_text};}}\
             :where(input,textarea,select){{background-color:{base};color:{text};}}\
             :where(tbody tr:nth-child(even)){{background-color:{alternate_base};}}\
             :where(button){{background-color:{button};color:{button_text};}}\
             :where(a:link,a:visited){{color:{link};}}\
             ::selection{{background:{highlight};color:{highlighted_text};}}",
            window = self.window.to_css_hex(),
            window_text = self.window_text.to_css_hex(),
            base = self.base.to_css_hex(),
            text = self.text.to_css_hex(),
            alternate_base = self.alternate_base.to_css_hex(),
            button = self.button.to_css_hex(),
            button_text = self.button_text.to_css_hex(),
            link = self.link.to_css_hex(),
            highlight = self.highlight.to_css_hex(),
            highlighted_text = self.highlighted_text.to_css_hex(),
        )
    }

    /// Runs before page scripts on every document; installs the palette stylesheet once.
    pub fn initialization_script(&self) -> String {
        format!(
            r#"(function () {{
  var install = function () {{
    if (document.getElementById("wl-dark-palette")) {{
      return;
    }}
    var style = document.createElement("style");
    style.id = "wl-dark-palette";
    style.textContent = {css:?};
    (document.head || document.documentElement).appendChild(style);
  }};
  if (document.documentElement) {{
    install();
  }} else {{
    document.addEventListener("DOMContentLoaded", install, {{ once: true }});
  }}
}})();"#,
            css = self.stylesheet()
        )
    }
}
