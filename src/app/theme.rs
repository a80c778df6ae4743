//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use ratatui::style::Color;

use crate::services::ThemeSettings;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub title_fg: Color,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub delete_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub muted_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::Cyan,
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            delete_fg: Color::Red,
            button_bg: Color::Blue,
            button_fg: Color::White,
            muted_fg: Color::DarkGray,
        }
    }
}

impl UiTheme {
    /// Unset or unparsable entries keep the built-in color.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        let slots: [(&Option<String>, &mut Color); 9] = [
            (&settings.title_fg, &mut theme.title_fg),
            (&settings.focus_border, &mut theme.focus_border),
            (&settings.inactive_border, &mut theme.inactive_border),
            (&settings.selected_bg, &mut theme.selected_bg),
            (&settings.selected_fg, &mut theme.selected_fg),
            (&settings.delete_fg, &mut theme.delete_fg),
            (&settings.button_bg, &mut theme.button_bg),
            (&settings.button_fg, &mut theme.button_fg),
            (&settings.muted_fg, &mut theme.muted_fg),
        ];
        for (value, slot) in slots {
            if let Some(color) = value.as_deref().and_then(parse_color) {
                *slot = color;
            }
        }
        theme
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgrey" | "dark_grey" => Color::DarkGray,
        "white" => Color::White,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        _ => return None,
    };

    Some(c)
}
