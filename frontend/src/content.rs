//! Site copy that is data rather than markup. Bundled at compile time from
//! `frontend/content/*.json`.

use log::error;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::animation::{self, CountUpConfig, Easing, NumberFormat};

const STATS: &str = include_str!("../content/stats.json");
const PILLARS: &str = include_str!("../content/pillars.json");
const SCENES: &str = include_str!("../content/scenes.json");
const PRODUCTS: &str = include_str!("../content/products.json");
const FOUNDERS: &str = include_str!("../content/founders.json");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Malformed {name} content: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatItem {
    pub value: f64,
    /// Where the count-up begins. Zero when absent.
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub format: NumberFormat,
    pub label: String,
    pub description: String,
}

impl StatItem {
    pub fn count_up(&self, duration_ms: f64) -> animation::Result<CountUpConfig> {
        let config = CountUpConfig::new(self.value, duration_ms)?.with_easing(self.easing);
        match self.start {
            Some(start) => config.starting_at(start),
            None => Ok(config),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pillar {
    pub id: u32,
    pub name: String,
    pub subtitle: String,
    pub summary: String,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub metric: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DemoScene {
    pub id: String,
    pub title: String,
    pub heading: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub market_impact: Vec<String>,
    #[serde(default)]
    pub clinical_validation: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub title: String,
    pub bio: String,
    pub vision: String,
}

pub fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Malformed { name, source })
}

fn load<T: DeserializeOwned>(name: &'static str, raw: &str) -> Vec<T> {
    parse(name, raw).unwrap_or_else(|e| {
        error!("{}", e);
        Vec::new()
    })
}

pub fn stats() -> Vec<StatItem> {
    load("stats", STATS)
}

pub fn pillars() -> Vec<Pillar> {
    load("pillars", PILLARS)
}

pub fn scenes() -> Vec<DemoScene> {
    load("scenes", SCENES)
}

pub fn products() -> Vec<Product> {
    load("products", PRODUCTS)
}

pub fn founders() -> Vec<Founder> {
    load("founders", FOUNDERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        assert!(parse::<StatItem>("stats", STATS).is_ok());
        assert!(parse::<Pillar>("pillars", PILLARS).is_ok());
        assert!(parse::<DemoScene>("scenes", SCENES).is_ok());
        assert!(parse::<Product>("products", PRODUCTS).is_ok());
        assert!(parse::<Founder>("founders", FOUNDERS).is_ok());
    }

    #[test]
    fn headline_stats_format_as_published() {
        let rendered: Vec<String> = stats()
            .iter()
            .map(|stat| stat.format.format(stat.value))
            .collect();
        assert_eq!(rendered, vec!["£42.5B", "982,000", "99.25%", "7x"]);
    }

    #[test]
    fn there_are_seven_pillars_in_order() {
        let ids: Vec<u32> = pillars().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn scene_ids_are_unique() {
        let scenes = scenes();
        let mut ids: Vec<&str> = scenes.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), scenes.len());
        assert_eq!(scenes[0].id, "gp-assessment");
    }

    #[test]
    fn stats_carry_their_count_up_settings() {
        let stats = stats();
        let patients = stats[1].count_up(2000.0).unwrap();
        assert_eq!(patients.start_value(), 900_000.0);
        assert_eq!(patients.target(), 982_000.0);

        let accuracy = stats[2].count_up(2000.0).unwrap();
        assert_eq!(accuracy.start_value(), 0.0);
        assert_eq!(accuracy.duration_ms(), 2000.0);
        assert_eq!(stats[3].easing, Easing::Linear);
    }

    #[test]
    fn non_finite_start_is_rejected() {
        let stat = StatItem {
            value: 10.0,
            start: Some(f64::NAN),
            easing: Easing::default(),
            format: NumberFormat::default(),
            label: "Broken".to_string(),
            description: String::new(),
        };
        assert!(stat.count_up(1000.0).is_err());
    }

    #[test]
    fn malformed_content_falls_back_to_empty() {
        assert!(parse::<Pillar>("pillars", "[{\"id\": \"one\"}]").is_err());
        assert!(load::<Pillar>("pillars", "not json").is_empty());
    }
}
