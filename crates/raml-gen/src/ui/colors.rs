use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, AnsiColor, Color as ClapColor, RgbColor, Style, Styles};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Semantic color slots used by terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  Primary,
  Accent,
  Success,
  Label,
  Value,
  Warning,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const fn dark(role: Role) -> Color {
  match role {
    Role::Timestamp => rgb(128, 156, 176),
    Role::Primary => rgb(204, 204, 196),
    Role::Accent => rgb(214, 118, 86),
    Role::Success => rgb(120, 186, 130),
    Role::Label => rgb(108, 170, 222),
    Role::Value => rgb(232, 206, 96),
    Role::Warning => rgb(230, 160, 60),
  }
}

const fn light(role: Role) -> Color {
  match role {
    Role::Timestamp => rgb(84, 98, 112),
    Role::Primary => rgb(40, 40, 46),
    Role::Accent => rgb(176, 64, 40),
    Role::Success => rgb(30, 126, 70),
    Role::Label => rgb(28, 92, 160),
    Role::Value => rgb(140, 96, 20),
    Role::Warning => rgb(170, 96, 0),
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  pub const fn role(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => dark(role),
      Theme::Light => light(role),
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.role(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.role(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.role(Role::Accent)
  }

  pub const fn success(&self) -> Color {
    self.role(Role::Success)
  }

  pub const fn label(&self) -> Color {
    self.role(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.role(Role::Value)
  }

  pub const fn warning(&self) -> Color {
    self.role(Role::Warning)
  }

  /// Table cell color for a role.
  pub fn cell(&self, role: Role) -> ComfyColor {
    match self.role(role) {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
      _ => ComfyColor::Reset,
    }
  }

  const fn clap_color(color: Color) -> Option<ClapColor> {
    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      Color::AnsiValue(value) => Some(ClapColor::Ansi256(Ansi256Color(value))),
      Color::Red | Color::DarkRed => Some(ClapColor::Ansi(AnsiColor::Red)),
      Color::Green | Color::DarkGreen => Some(ClapColor::Ansi(AnsiColor::Green)),
      Color::Yellow | Color::DarkYellow => Some(ClapColor::Ansi(AnsiColor::Yellow)),
      _ => None,
    }
  }

  /// Help output styling; always uses the dark palette.
  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);
    let label = Self::clap_color(colors.label());
    let success = Self::clap_color(colors.success());
    let accent = Self::clap_color(colors.accent());

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(label))
      .usage(Style::new().bold().fg_color(label))
      .literal(Style::new().fg_color(success))
      .placeholder(Style::new().fg_color(Self::clap_color(colors.value())))
      .error(Style::new().bold().fg_color(accent))
      .valid(Style::new().fg_color(success))
      .invalid(Style::new().bold().fg_color(accent))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()),
  }
}

/// `COLORFGBG` is `fg;bg`; background indices 7 and above are light.
fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
  match value.and_then(|v| v.rsplit(';').next()).and_then(|bg| bg.parse::<u8>().ok()) {
    Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
    _ => Theme::Dark,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_disabled_colors_reset() {
    let colors = Colors::new(false, Theme::Light);
    assert_eq!(colors.label(), Color::Reset);
    assert_eq!(colors.cell(Role::Value), ComfyColor::Reset);
  }

  #[test]
  fn test_themes_differ() {
    let dark = Colors::new(true, Theme::Dark);
    let light = Colors::new(true, Theme::Light);
    assert_ne!(dark.accent(), light.accent());
    assert_eq!(dark.cell(Role::Label), ComfyColor::Rgb { r: 108, g: 170, b: 222 });
  }

  #[test]
  fn test_theme_from_colorfgbg() {
    assert_eq!(theme_from_colorfgbg(Some("0;15")), Theme::Light);
    assert_eq!(theme_from_colorfgbg(Some("15;0")), Theme::Dark);
    assert_eq!(theme_from_colorfgbg(Some("15;default;8")), Theme::Dark);
    assert_eq!(theme_from_colorfgbg(Some("garbage")), Theme::Dark);
    assert_eq!(theme_from_colorfgbg(None), Theme::Dark);
  }

  #[test]
  fn test_explicit_modes() {
    assert!(colors_enabled(ColorMode::Always));
    assert!(!colors_enabled(ColorMode::Never));
    assert_eq!(detect_theme(ThemeMode::Light), Theme::Light);
    assert_eq!(detect_theme(ThemeMode::Dark), Theme::Dark);
  }
}
