use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `region_active` → `#1e3a8a on #dbeafe`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parses `[modifiers] [fg] [on bg]`, e.g. `bold white on #1e3a8a`
pub fn parse_style(line: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut background = false;

    for token in line.split_whitespace() {
        let token = token.to_ascii_lowercase();
        match token.as_str() {
            "on" => background = true,
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underline" => style = style.add_modifier(Modifier::UNDERLINED),
            "inverse" => style = style.add_modifier(Modifier::REVERSED),
            color => {
                let color = Color::from_str(&color.replace("grey", "gray"))
                    .map_err(|_| format!("Unable to parse color `{color}` in `{line}`"))?;
                style = if background {
                    style.bg(color)
                } else {
                    style.fg(color)
                };
            }
        }
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Ok(Style::default()));
    }

    #[test]
    fn test_parse_style_foreground() {
        assert_eq!(parse_style("red"), Ok(Style::default().fg(Color::Red)));
        assert_eq!(parse_style("darkgrey"), Ok(Style::default().fg(Color::DarkGray)));
    }

    #[test]
    fn test_parse_style_background() {
        assert_eq!(
            parse_style("white on #1e3a8a"),
            Ok(Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x1e, 0x3a, 0x8a)))
        );
        assert_eq!(parse_style("on blue"), Ok(Style::default().bg(Color::Blue)));
    }

    #[test]
    fn test_parse_style_modifiers() {
        assert_eq!(
            parse_style("bold underline yellow"),
            Ok(Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        );
    }

    #[test]
    fn test_parse_style_invalid_color() {
        assert!(parse_style("bold ultraviolet").is_err());
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r##"{ badge_breaking: "#dc2626 on #fee2e2" }"##)?;

        assert_eq!(
            styles.get_or_default("badge_breaking"),
            Style::default()
                .fg(Color::Rgb(0xdc, 0x26, 0x26))
                .bg(Color::Rgb(0xfe, 0xe2, 0xe2))
        );
        assert_eq!(styles.get_or_default("missing"), Style::default());
        Ok(())
    }
}
