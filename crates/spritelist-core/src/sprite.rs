//! Sprite URL templates.
//!
//! The PokeAPI sprites repository exposes several renderings per Pokémon. The
//! built-in styles are listed from highest to lowest quality; a custom
//! template can be supplied instead as long as it contains [`ID_PLACEHOLDER`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder substituted with the record identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

const OFFICIAL_ARTWORK_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png";
const HOME_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home/{id}.png";
const DEFAULT_SPRITE_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png";

/// Built-in sprite source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpriteStyle {
    #[default]
    OfficialArtwork,
    Home,
    Default,
}

impl SpriteStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            SpriteStyle::OfficialArtwork => "official-artwork",
            SpriteStyle::Home => "home",
            SpriteStyle::Default => "default",
        }
    }

    pub fn template(self) -> SpriteTemplate {
        let template = match self {
            SpriteStyle::OfficialArtwork => OFFICIAL_ARTWORK_TEMPLATE,
            SpriteStyle::Home => HOME_TEMPLATE,
            SpriteStyle::Default => DEFAULT_SPRITE_TEMPLATE,
        };
        SpriteTemplate {
            template: template.to_string(),
        }
    }
}

impl fmt::Display for SpriteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sprite style {0:?} (expected official-artwork, home or default)")]
pub struct UnknownSpriteStyle(String);

impl FromStr for SpriteStyle {
    type Err = UnknownSpriteStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "official-artwork" => Ok(SpriteStyle::OfficialArtwork),
            "home" => Ok(SpriteStyle::Home),
            "default" => Ok(SpriteStyle::Default),
            other => Err(UnknownSpriteStyle(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template {0:?} does not contain the {{id}} placeholder")]
    MissingPlaceholder(String),

    #[error("template does not produce an absolute URL (got {rendered:?}): {source}")]
    InvalidUrl {
        rendered: String,
        #[source]
        source: url::ParseError,
    },
}

/// A validated image URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTemplate {
    template: String,
}

impl SpriteTemplate {
    /// Validates a custom template: it must contain `{id}` and expand to an
    /// absolute URL.
    pub fn new(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        if !template.contains(ID_PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder(template));
        }
        let rendered = template.replace(ID_PLACEHOLDER, "1");
        if let Err(source) = url::Url::parse(&rendered) {
            return Err(TemplateError::InvalidUrl { rendered, source });
        }
        Ok(Self { template })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitutes `identifier` for every `{id}` in the template.
    pub fn expand(&self, identifier: &str) -> String {
        self.template.replace(ID_PLACEHOLDER, identifier)
    }
}

impl Default for SpriteTemplate {
    fn default() -> Self {
        SpriteStyle::default().template()
    }
}
