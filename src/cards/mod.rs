pub mod set;

/// Card colors in the order the weighted color walk visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
    Artifact,
    Land,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Artifact,
        Color::Land,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub name: String,
    pub color: Color,
    pub rarity: Rarity,

    /// Mana cost, not present in every set export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

impl Card {
    pub fn new(name: String, color: Color, rarity: Rarity) -> Self {
        Self {
            name,
            color,
            rarity,
            cost: None,
        }
    }

    #[cfg(test)]
    pub fn sample(color: Color, rarity: Rarity) -> Self {
        static ID: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(1);

        let id = ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Self::new(format!("Card {id}"), color, rarity)
    }
}
