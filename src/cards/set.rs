use std::path::Path;

use bytes::Buf;
use serde::de::DeserializeOwned;

use crate::cards::Card;

const SET_FILE: &str = "alpha.json";

fn decode_json<T: DeserializeOwned>(bytes: bytes::Bytes) -> Result<T, String> {
    serde_json::de::from_reader(bytes.reader()).map_err(|e| e.to_string())
}

/// Loads the card pool from the set file in the given data directory.
pub async fn load_cards(data: &Path) -> Result<Vec<Card>, String> {
    let file = data.join(SET_FILE);
    tracing::debug!("Loading card set from {}.", file.display());

    let raw = tokio::fs::read(&file).await.map_err(|e| e.to_string())?;
    tracing::debug!("Read set data from disk. Parsing JSON.");
    let cards: Vec<Card> = decode_json(bytes::Bytes::from(raw))?;
    tracing::debug!("Parsed {} cards from set file.", cards.len());
    Ok(cards)
}

#[cfg(test)]
mod test {
    use crate::cards::{Card, Color, Rarity};

    use super::decode_json;

    #[test]
    fn test_decode_cards() {
        let json = r#"[
            { "name": "Benalish Hero", "color": "white", "rarity": "common" },
            { "name": "Black Lotus", "color": "artifact", "rarity": "rare", "cost": "0" }
        ]"#;

        let cards: Vec<Card> = decode_json(bytes::Bytes::from(json)).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Benalish Hero");
        assert_eq!(cards[0].color, Color::White);
        assert_eq!(cards[0].rarity, Rarity::Common);
        assert_eq!(cards[0].cost, None);
        assert_eq!(cards[1].color, Color::Artifact);
        assert_eq!(cards[1].cost, Some("0".to_string()));
    }

    #[test]
    fn test_decode_rejects_unknown_color() {
        let json = r#"[{ "name": "Bad Card", "color": "purple", "rarity": "common" }]"#;
        assert!(decode_json::<Vec<Card>>(bytes::Bytes::from(json)).is_err());
    }

    #[test]
    fn test_shipped_set_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/alpha.json");
        let raw = std::fs::read(path).unwrap();
        let cards: Vec<Card> = decode_json(bytes::Bytes::from(raw)).unwrap();

        assert_eq!(cards.len(), 282);

        // Lands in this set exist only at rare; the generator's retry policy
        // is what copes with the empty common/uncommon land cells.
        assert!(cards
            .iter()
            .filter(|c| c.color == Color::Land)
            .all(|c| c.rarity == Rarity::Rare));
    }
}
