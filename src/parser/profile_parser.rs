// Community profile XML feed (`/games?xml=1`)
use crate::model::{NOT_AVAILABLE, OwnedGame, ParserError, ProfileLibrary};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct GamesListFeed {
    #[serde(rename = "steamID")]
    steam_id: Option<String>,
    games: Option<GamesNode>,
    /// Present instead of everything else when the profile is unknown or private.
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GamesNode {
    #[serde(rename = "game", default)]
    games: Vec<GameNode>,
}

#[derive(Debug, Deserialize)]
struct GameNode {
    #[serde(rename = "appID")]
    app_id: Option<String>,
    name: Option<String>,
    #[serde(rename = "hoursOnRecord")]
    hours_on_record: Option<String>,
}

pub struct ProfileParser;

impl ProfileParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, xml: &str) -> Result<ProfileLibrary, ParserError> {
        let feed: GamesListFeed = quick_xml::de::from_str(xml)
            .map_err(|e| ParserError::XmlParseError(e.to_string()))?;

        if let Some(error) = feed.error {
            return Err(ParserError::ProfileError(error.trim().to_string()));
        }

        let mut games: Vec<OwnedGame> = feed
            .games
            .map(|node| node.games)
            .unwrap_or_default()
            .into_iter()
            .filter_map(to_owned_game)
            .collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(ProfileLibrary {
            steam_id: non_empty(feed.steam_id),
            games,
        })
    }
}

fn to_owned_game(node: GameNode) -> Option<OwnedGame> {
    let name = node.name.filter(|n| !n.trim().is_empty());
    let (Some(name), Some(app_id)) = (name, non_empty(node.app_id)) else {
        warn!("Skipping feed entry without name or appID");
        return None;
    };
    Some(OwnedGame {
        name,
        app_id,
        hours_on_record: non_empty(node.hours_on_record)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
