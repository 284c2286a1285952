//! Static content records rendered by the page.
//!
//! The tables live in `assets/content.toml` and are deserialized once at
//! startup. Records are immutable after loading.

use serde::Deserialize;

use crate::core::error::ContentError;

/// Accent color of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Red,
    Blue,
}

/// Semantic icon names used by the content tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    Wifi,
    Groups,
    Database,
    Security,
    Lan,
    SupportAgent,
    Router,
    SettingsPhone,
    BusinessCenter,
    VpnLock,
    Dns,
    CloudSync,
    Cloud,
    Vision,
    Mission,
    Network,
}

/// A service offering card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub icon: IconName,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub accent: Accent,
}

/// A single solution inside a category.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SolutionItem {
    pub title: String,
    pub description: String,
    pub icon: IconName,
}

/// A group of solutions under a heading.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SolutionCategory {
    pub name: String,
    #[serde(default)]
    pub accent: Accent,
    pub items: Vec<SolutionItem>,
}

/// A client shown in the clients grid and the logo carousel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Client {
    pub name: String,
    pub logo: String,
    /// Logos with heavy padding are rendered slightly smaller.
    #[serde(default)]
    pub compact: bool,
}

/// A vendor or strategic partner.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Partner {
    pub name: String,
    pub logo: String,
}

/// A panel on the About page (vision, mission, what we do).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AboutPanel {
    pub title: String,
    pub icon: IconName,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub accent: Accent,
}

/// All content tables.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContentRegistry {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub solutions: Vec<SolutionCategory>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub about: Vec<AboutPanel>,
}

impl ContentRegistry {
    /// Parse the registry from TOML source.
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }

    /// Total number of solution items across all categories.
    pub fn solution_count(&self) -> usize {
        self.solutions.iter().map(|c| c.items.len()).sum()
    }
}
