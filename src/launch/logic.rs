//! Launch-time routing between remote content and the game.

use std::io;

use super::types::{LaunchDecision, LaunchDestination, RemoteLink};

/// Something that can fetch the raw configuration string.
pub trait ConfigFetcher {
    fn fetch_configuration(&self) -> io::Result<String>;
}

/// Split a `token#link` response. Anything without a `#` is not a link.
pub fn parse_configuration(response: &str) -> Option<(String, String)> {
    if !response.contains('#') {
        return None;
    }
    let parts: Vec<&str> = response.split('#').collect();
    if parts.len() < 2 {
        return None;
    }
    Some((parts[0].to_string(), parts[1].to_string()))
}

/// Decide where to go at launch.
///
/// A stored token and link win without any network traffic. Otherwise the
/// fetcher (if any) is asked; a `token#link` answer is remembered in `stored`
/// and routes to remote content. Every other outcome shows the game.
pub fn resolve_launch<F: ConfigFetcher + ?Sized>(
    stored: &mut RemoteLink,
    fetcher: Option<&F>,
) -> LaunchDecision {
    if stored.has_stored_token() {
        if let Some(link) = stored.remote_link.clone() {
            log::info!("launch: using stored remote link");
            return LaunchDecision {
                destination: LaunchDestination::RemoteContent { link },
                was_token_preloaded: true,
            };
        }
    }

    let game = LaunchDecision {
        destination: LaunchDestination::GameTabBar,
        was_token_preloaded: false,
    };

    let Some(fetcher) = fetcher else {
        return game;
    };

    match fetcher.fetch_configuration() {
        Ok(response) => match parse_configuration(&response) {
            Some((token, link)) => {
                log::info!("launch: remote link received");
                stored.access_token = Some(token);
                stored.remote_link = Some(link.clone());
                LaunchDecision {
                    destination: LaunchDestination::RemoteContent { link },
                    was_token_preloaded: false,
                }
            }
            None => {
                log::info!("launch: no remote link, showing game");
                game
            }
        },
        Err(e) => {
            log::warn!("launch: configuration fetch failed: {}", e);
            game
        }
    }
}
