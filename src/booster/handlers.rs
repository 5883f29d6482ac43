use std::sync::Arc;

use rand::thread_rng;

use crate::{AppState, Resp};

use super::{Booster, BoosterGenerator};

/// Boosters generated per request when the count parameter is absent or not
/// a number.
const DEFAULT_BOOSTERS: u32 = 3;

/// Upper bounds on request-supplied sizes. Generous for any real booster
/// layout while keeping a hostile request from forcing huge allocations or
/// billions of draws.
const MAX_BOOSTERS: u32 = 100;
const MAX_RARITY_COUNT: u32 = 100;

#[derive(serde::Deserialize)]
pub struct BoosterQuery {
    count: Option<String>,
    commons: Option<String>,
    uncommons: Option<String>,
    rares: Option<String>,
}

fn batch_size(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_BOOSTERS)
}

fn rarity_count(raw: &str) -> Option<u32> {
    u32::from_str_radix(raw, 10)
        .ok()
        .filter(|n| *n <= MAX_RARITY_COUNT)
}

pub async fn handle_booster_request(
    state: Arc<AppState>,
    query: BoosterQuery,
) -> axum::response::Response<String> {
    let count = batch_size(query.count.as_deref());
    if count > MAX_BOOSTERS {
        return Resp::e422(format!(
            "Booster count {count} exceeds maximum of {MAX_BOOSTERS}."
        ));
    }

    let mut stats = state.stats;
    if let Some(s) = &query.commons {
        match rarity_count(s) {
            Some(n) => stats.rarities.common = n,
            None => return Resp::e422(format!("Invalid number of commons per booster: {s}")),
        }
    }
    if let Some(s) = &query.uncommons {
        match rarity_count(s) {
            Some(n) => stats.rarities.uncommon = n,
            None => return Resp::e422(format!("Invalid number of uncommons per booster: {s}")),
        }
    }
    if let Some(s) = &query.rares {
        match rarity_count(s) {
            Some(n) => stats.rarities.rare = n,
            None => return Resp::e422(format!("Invalid number of rares per booster: {s}")),
        }
    }

    let generator = match BoosterGenerator::new(state.pool.clone(), stats) {
        Ok(generator) => generator,
        Err(e) => return Resp::e422(e),
    };

    tracing::debug!("Generating {} boosters with {:?}.", count, generator);

    let rng = &mut thread_rng();
    let mut boosters: Vec<Booster> = Vec::with_capacity(count as usize);
    for _ in 0..count {
        match generator.generate(rng) {
            Ok(booster) => boosters.push(booster),
            Err(e) => return Resp::e500(e),
        }
    }

    match serde_json::ser::to_string(&boosters) {
        Ok(body) => {
            let mut resp = axum::http::Response::new(body);
            resp.headers_mut().insert(
                axum::http::header::CONTENT_TYPE,
                axum::http::HeaderValue::from_static("application/json"),
            );
            resp
        }
        Err(e) => Resp::e500(format!("Failed to JSON encode boosters: {e}")),
    }
}

#[cfg(test)]
mod test {
    use super::{batch_size, rarity_count};

    #[test]
    fn test_batch_size_defaults() {
        assert_eq!(batch_size(Some("5")), 5);
        assert_eq!(batch_size(None), 3);
        assert_eq!(batch_size(Some("several")), 3);
        assert_eq!(batch_size(Some("-2")), 3);
    }

    #[test]
    fn test_rarity_count_bounds() {
        assert_eq!(rarity_count("11"), Some(11));
        assert_eq!(rarity_count("100"), Some(100));
        assert_eq!(rarity_count("101"), None);
        assert_eq!(rarity_count("4294967295"), None);
        assert_eq!(rarity_count("eleven"), None);
        assert_eq!(rarity_count("-1"), None);
    }
}
