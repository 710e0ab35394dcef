//! Game catalog.
//!
//! The store shelves the same titles in several sections: a featured strip
//! and one section per platform. Each placement gets its own [`GameId`]:
//!
//! | Section         | Ids         |
//! |-----------------|-------------|
//! | Featured        | 1, 2, 3     |
//! | PC              | 4 ..= 11    |
//! | `PlayStation`   | 100 + index |
//! | Xbox            | 200 + index |
//! | Switch          | 300 + index |
//!
//! Cart uniqueness is by id only, so "Cyberpunk 2077" for PC (5) and for
//! Xbox (201) are separate cart items.

mod data;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use gamestore_core::{CartLineItem, GameId, Price, PriceError};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::error::{Result, StorefrontError};
use data::{FEATURED_COUNT, GameSeed, LISTINGS};

/// Regex for extracting the video id from watch, short, and embed links.
static YOUTUBE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:watch\?v=|youtu\.be/|embed/)([A-Za-z0-9_-]{11})").expect("Invalid regex")
});

/// Storefront shelf a listing appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Featured,
    Pc,
    PlayStation,
    Xbox,
    Switch,
}

impl Section {
    /// Every section, in page order.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::Pc,
        Self::PlayStation,
        Self::Xbox,
        Self::Switch,
    ];

    /// Heading shown above the section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Featured => "Featured Games",
            Self::Pc => "PC Games",
            Self::PlayStation => "PlayStation Games",
            Self::Xbox => "Xbox Games",
            Self::Switch => "Nintendo Switch Games",
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Pc => "pc",
            Self::PlayStation => "playstation",
            Self::Xbox => "xbox",
            Self::Switch => "switch",
        }
    }

    /// Id of the first listing in the section.
    const fn first_id(self) -> i32 {
        match self {
            Self::Featured => 1,
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            Self::Pc => 1 + FEATURED_COUNT as i32,
            Self::PlayStation => 100,
            Self::Xbox => 200,
            Self::Switch => 300,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error parsing a section name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section {0:?} (expected featured, pc, playstation, xbox, or switch)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == wanted)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A purchasable listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub section: Section,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub video_url: &'static str,
    pub youtube_url: &'static str,
    pub price: Price,
    pub genre: &'static str,
    pub publisher: &'static str,
    pub release_date: &'static str,
    pub platforms: &'static [&'static str],
    pub rating: &'static str,
    pub features: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl Game {
    fn from_seed(
        id: i32,
        section: Section,
        seed: &GameSeed,
    ) -> std::result::Result<Self, PriceError> {
        Ok(Self {
            id: GameId::new(id),
            section,
            title: seed.title,
            description: seed.description,
            image_url: seed.image_url,
            video_url: seed.video_url,
            youtube_url: seed.youtube_url,
            price: seed.price.parse()?,
            genre: seed.genre,
            publisher: seed.publisher,
            release_date: seed.release_date,
            platforms: seed.platforms,
            rating: seed.rating,
            features: seed.features,
            tags: seed.tags,
        })
    }

    /// Cart entry for this listing.
    #[must_use]
    pub fn line_item(&self) -> CartLineItem {
        CartLineItem {
            id: self.id,
            title: self.title.to_string(),
            price: self.price,
            image_url: self.image_url.to_string(),
        }
    }

    /// Parsed release date, if the listing carries a valid one.
    #[must_use]
    pub fn release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date, "%Y-%m-%d").ok()
    }

    /// Embeddable trailer url.
    #[must_use]
    pub fn youtube_embed_url(&self) -> Option<String> {
        youtube_embed_url(self.youtube_url)
    }
}

/// Convert a watch, short, or embed link into an embed url.
#[must_use]
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let video_id = YOUTUBE_ID_RE.captures(url)?.get(1)?.as_str();
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}

/// All listings in the store.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    /// The built-in storefront catalog.
    ///
    /// A listing whose price text does not parse is left off the shelf; the
    /// ids of the listings after it are unchanged.
    #[must_use]
    pub fn builtin() -> Self {
        let mut games = Vec::new();

        for section in Section::ALL {
            let seeds = LISTINGS
                .iter()
                .take(if section == Section::Featured {
                    FEATURED_COUNT
                } else {
                    LISTINGS.len()
                });
            for (id, seed) in (section.first_id()..).zip(seeds) {
                match Game::from_seed(id, section, seed) {
                    Ok(game) => games.push(game),
                    Err(e) => {
                        tracing::warn!(id, title = seed.title, error = %e, "Skipping listing");
                    }
                }
            }
        }

        Self { games }
    }

    /// Every listing, in page order.
    #[must_use]
    pub fn all(&self) -> &[Game] {
        &self.games
    }

    /// Listing with `id`, if any.
    #[must_use]
    pub fn find(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Listing with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::GameNotFound` if no listing has that id.
    pub fn get(&self, id: GameId) -> Result<&Game> {
        self.find(id).ok_or(StorefrontError::GameNotFound(id))
    }

    /// Listings in one section.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Game> {
        self.games.iter().filter(move |game| game.section == section)
    }

    /// Every listing of the same title, across sections.
    #[must_use]
    pub fn editions_of(&self, title: &str) -> Vec<&Game> {
        self.games.iter().filter(|game| game.title == title).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
