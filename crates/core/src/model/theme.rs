use serde::{Deserialize, Serialize};

/// Branding and layout configuration supplied by the external configuration
/// collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub platform_title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub modules_heading: String,
    pub footer_text: String,
    pub background_color: String,
    pub card_color: String,
    pub text_color: String,
    pub primary_action_color: String,
    pub secondary_action_color: String,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            platform_title: "AI Coding Academy".into(),
            hero_title: "Kuasai Koding & AI dengan Mudah".into(),
            hero_subtitle: "Platform pembelajaran interaktif untuk menguasai keterampilan \
                            koding dan kecerdasan artificial"
                .into(),
            modules_heading: "Modul Pembelajaran".into(),
            footer_text: "© 2025 Pelatihan Koding dan Kecerdasan Artificial oleh Suwito Setiadi"
                .into(),
            background_color: "#667eea".into(),
            card_color: "#ffffff".into(),
            text_color: "#1f2937".into(),
            primary_action_color: "#3b82f6".into(),
            secondary_action_color: "#8b5cf6".into(),
            font_family: "ui-sans-serif, system-ui, sans-serif".into(),
            font_size: 16,
        }
    }
}

/// Partial configuration pushed by the collaborator; unset or blank fields
/// fall back to the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub platform_title: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub modules_heading: Option<String>,
    pub footer_text: Option<String>,
    pub background_color: Option<String>,
    pub card_color: Option<String>,
    pub text_color: Option<String>,
    pub primary_action_color: Option<String>,
    pub secondary_action_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
}

impl ThemeOverrides {
    /// Resolves the overrides onto the defaults, field by field.
    #[must_use]
    pub fn resolve(&self) -> ThemeConfig {
        let defaults = ThemeConfig::default();
        ThemeConfig {
            platform_title: pick(&self.platform_title, defaults.platform_title),
            hero_title: pick(&self.hero_title, defaults.hero_title),
            hero_subtitle: pick(&self.hero_subtitle, defaults.hero_subtitle),
            modules_heading: pick(&self.modules_heading, defaults.modules_heading),
            footer_text: pick(&self.footer_text, defaults.footer_text),
            background_color: pick(&self.background_color, defaults.background_color),
            card_color: pick(&self.card_color, defaults.card_color),
            text_color: pick(&self.text_color, defaults.text_color),
            primary_action_color: pick(&self.primary_action_color, defaults.primary_action_color),
            secondary_action_color: pick(
                &self.secondary_action_color,
                defaults.secondary_action_color,
            ),
            font_family: pick(&self.font_family, defaults.font_family),
            font_size: self.font_size.unwrap_or(defaults.font_size),
        }
    }
}

fn pick(value: &Option<String>, default: String) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => default,
    }
}

/// Field name → current value mapping exposed to the external edit panel.
///
/// Only the five text fields are editable; colors and fonts are not offered.
#[must_use]
pub fn edit_panel_values(config: &ThemeConfig) -> Vec<(&'static str, String)> {
    vec![
        ("platform_title", config.platform_title.clone()),
        ("hero_title", config.hero_title.clone()),
        ("hero_subtitle", config.hero_subtitle.clone()),
        ("modules_heading", config.modules_heading.clone()),
        ("footer_text", config.footer_text.clone()),
    ]
}

/// Capability manifest advertised to the external editor.
///
/// Deliberately empty: no surface is recolorable, borderable, or
/// font-editable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeCapabilities {
    pub recolorables: Vec<String>,
    pub borderables: Vec<String>,
    pub font_editable: Option<bool>,
    pub font_sizeable: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_resolve_onto_defaults() {
        let overrides = ThemeOverrides {
            platform_title: Some("Akademi Koding".into()),
            font_size: Some(18),
            ..ThemeOverrides::default()
        };

        let config = overrides.resolve();
        assert_eq!(config.platform_title, "Akademi Koding");
        assert_eq!(config.font_size, 18);
        assert_eq!(config.modules_heading, "Modul Pembelajaran");
    }

    #[test]
    fn blank_overrides_fall_back() {
        let overrides = ThemeOverrides {
            hero_title: Some("   ".into()),
            ..ThemeOverrides::default()
        };
        assert_eq!(
            overrides.resolve().hero_title,
            "Kuasai Koding & AI dengan Mudah"
        );
    }

    #[test]
    fn edit_panel_exposes_the_five_text_fields() {
        let values = edit_panel_values(&ThemeConfig::default());
        let names: Vec<&str> = values.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "platform_title",
                "hero_title",
                "hero_subtitle",
                "modules_heading",
                "footer_text"
            ]
        );
    }

    #[test]
    fn capabilities_declare_nothing_editable() {
        let caps = ThemeCapabilities::default();
        assert!(caps.recolorables.is_empty());
        assert!(caps.borderables.is_empty());
        assert!(caps.font_editable.is_none());
        assert!(caps.font_sizeable.is_none());
    }
}
