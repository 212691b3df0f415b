//! Player and Clan Links
//!
//! Builds public page URLs for players and clans. No requests are made.

use serde::{Deserialize, Serialize};

/// Largest avatar dimension the avatar service honours.
pub const MAX_AVATAR_DIMENSION: u32 = 100;

/// Site hosting a player or clan page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageSource {
    /// Official site.
    RuneScape,
    /// RuneMetrics (players only).
    RuneMetrics,
    /// RuneInfo.
    RuneInfo,
    /// RunePixels.
    RunePixels,
    /// RuneTracker (players only).
    RuneTracker,
}

/// A page on one site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Hosting site.
    pub source: PageSource,
    /// Full URL.
    pub url: String,
}

/// Replace spaces in a display name with a site-specific delimiter.
fn transform_name(name: &str, delimiter: &str) -> String {
    name.replace(' ', delimiter)
}

/// Chat-head avatar URL for `name`.
///
/// Width and height are capped at [`MAX_AVATAR_DIMENSION`].
pub fn avatar(name: &str, width: Option<u32>, height: Option<u32>) -> String {
    let mut params = Vec::new();
    if let Some(w) = width {
        params.push(format!("w={}", w.min(MAX_AVATAR_DIMENSION)));
    }
    if let Some(h) = height {
        params.push(format!("h={}", h.min(MAX_AVATAR_DIMENSION)));
    }

    let base = format!(
        "https://secure.runescape.com/m=avatar-rs/{}/chat.png",
        transform_name(name, "%20")
    );
    if params.is_empty() {
        base
    } else {
        format!("{base}?{}", params.join("&"))
    }
}

/// Every known page for player `name`.
pub fn player_pages(name: &str) -> Vec<Page> {
    let encoded = transform_name(name, "%20");
    vec![
        Page {
            source: PageSource::RuneScape,
            url: format!("https://secure.runescape.com/m=hiscore/compare?user1={}", transform_name(name, "+")),
        },
        Page {
            source: PageSource::RuneMetrics,
            url: format!("https://apps.runescape.com/runemetrics/app/overview/player/{encoded}"),
        },
        Page {
            source: PageSource::RuneInfo,
            url: format!("https://runeinfo.com/profile/{encoded}"),
        },
        Page {
            source: PageSource::RunePixels,
            url: format!("https://runepixels.com/players/{}", transform_name(name, "-")),
        },
        Page {
            source: PageSource::RuneTracker,
            url: format!("https://runetracker.org/track-{}", transform_name(name, "+")),
        },
    ]
}

/// Every known home page for `clan`.
pub fn clan_pages(clan: &str) -> Vec<Page> {
    let encoded = transform_name(clan, "%20");
    vec![
        Page {
            source: PageSource::RuneScape,
            url: format!("https://services.runescape.com/m=clan-home/clan/{encoded}"),
        },
        Page {
            source: PageSource::RuneInfo,
            url: format!("https://runeinfo.com/clan/{encoded}"),
        },
        Page {
            source: PageSource::RunePixels,
            url: format!("https://runepixels.com/clans/{}", transform_name(clan, "-")),
        },
    ]
}
