//! Static site content: client logos and the "What's New" feed
//!
//! Both catalogues follow the same pattern: a built-in set compiled into the
//! crate plus a JSON loader the host feeds with a fetched document.

use serde::{Deserialize, Serialize};

use crate::core::MotionError;
use super::color::Color;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoEntry {
    pub id: u32,
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogoCatalog {
    logos: Vec<LogoEntry>,
}

impl LogoCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the `/data/logos.json` document (`[{id, src, alt}, ...]`).
    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        let logos: Vec<LogoEntry> = serde_json::from_str(json).map_err(|e| MotionError::DataFetch {
            resource: "logos",
            reason: e.to_string(),
        })?;
        Ok(Self { logos })
    }

    /// Fetch result as delivered by the host: on failure the error is
    /// logged and the carousel stays empty. No retry.
    pub fn load_or_empty(fetched: Result<&str, &str>) -> Self {
        let parsed = match fetched {
            Ok(body) => Self::from_json(body),
            Err(reason) => Err(MotionError::DataFetch {
                resource: "logos",
                reason: reason.to_string(),
            }),
        };
        match parsed {
            Ok(catalog) => catalog,
            Err(e) => {
                motion_error!("Error loading logos: {}", e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }

    pub fn logos(&self) -> &[LogoEntry] {
        &self.logos
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: u32,
    pub image: String,
    pub tag: String,
    pub tag_color: Color,
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
}

impl FeedItem {
    /// Alt text shown on the card image
    pub fn alt_text(&self) -> String {
        format!("{} - {}", self.title, self.description)
    }

    /// Only items with both a link and a label render a call-to-action
    pub fn call_to_action(&self) -> Option<(&str, &str)> {
        match (&self.link, &self.link_text) {
            (Some(link), Some(text)) => Some((link.as_str(), text.as_str())),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedCatalog {
    items: Vec<FeedItem>,
}

impl FeedCatalog {
    pub fn builtin() -> Self {
        let item = |id: u32, image: &str, tag: &str, color: Color, date: &str, title: &str, description: &str, link: Option<(&str, &str)>| FeedItem {
            id,
            image: format!("https://a-us.storyblok.com/f/1017006/770x1000/{}/m/300x390/filters:quality(80)", image),
            tag: tag.to_string(),
            tag_color: color,
            date: date.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            link: link.map(|(l, _)| l.to_string()),
            link_text: link.map(|(_, t)| t.to_string()),
        };

        Self {
            items: vec![
                item(
                    1,
                    "2ef84dad83/surveillance-watch.jpg",
                    "Site Launch",
                    Color::rgb(0x1b, 0x22, 0x37),
                    "28.08.24",
                    "Surveillance Watch",
                    "An interactive data visualisation highlighting global surveillance connections",
                    Some(("https://www.surveillancewatch.io/", "Explore")),
                ),
                item(
                    2,
                    "2b0e547469/unearthed.jpg",
                    "Site Launch",
                    Color::rgb(0xf6, 0x87, 0x38),
                    "30.07.24",
                    "Unearthed",
                    "An all new website to showcase the teams expertise across innovation in the resources sector.",
                    Some(("https://unearthed.solutions/", "Check it out")),
                ),
                item(
                    3,
                    "17b3d35e06/humaans.jpg",
                    "Milestone",
                    Color::rgb(0x28, 0x22, 0x1e),
                    "01.07.24",
                    "Humaaniversary",
                    "Celebrating 14 years of making extraordinary digital products with our incredible team.",
                    None,
                ),
                item(
                    4,
                    "e4a71105cb/mymindcheck.png",
                    "Site Launch",
                    Color::rgb(0xff, 0x64, 0x65),
                    "30.05.24",
                    "My Mind Check",
                    "An evidence-based digital mental health and wellbeing check-in for Australian schools.",
                    Some(("https://mymindcheck.org.au/", "Visit website")),
                ),
                item(
                    5,
                    "2fbc3c1071/awa.jpg",
                    "Awards",
                    Color::rgb(0x36, 0x1f, 0x0f),
                    "22.05.24",
                    "Australian Web Awards",
                    "15 nominations and 2 wins, including Best in show: Design.",
                    None,
                ),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        let items: Vec<FeedItem> = serde_json::from_str(json).map_err(|e| MotionError::DataFetch {
            resource: "feed",
            reason: e.to_string(),
        })?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for FeedCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
