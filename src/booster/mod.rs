use crate::cards::Color;

mod generator;
pub mod handlers;

pub use generator::{Booster, BoosterGenerator, MAX_ATTEMPTS};

/// Relative likelihood of each color being picked for a card slot. Weights
/// need not sum to anything in particular; zero disables a color entirely.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(default)]
pub struct ColorWeights {
    pub white: f64,
    pub blue: f64,
    pub black: f64,
    pub red: f64,
    pub green: f64,
    pub artifact: f64,
    pub land: f64,
}

impl ColorWeights {
    pub fn weight(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white,
            Color::Blue => self.blue,
            Color::Black => self.black,
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Artifact => self.artifact,
            Color::Land => self.land,
        }
    }
}

impl Default for ColorWeights {
    fn default() -> Self {
        ColorWeights {
            white: 1.0,
            blue: 1.0,
            black: 1.0,
            red: 1.0,
            green: 1.0,
            artifact: 0.8,
            land: 0.7,
        }
    }
}

/// How many cards of each rarity go into a booster.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(default)]
pub struct RarityCounts {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
}

impl RarityCounts {
    /// Total cards per booster. Sums as u64; each count may be u32::MAX.
    pub fn total(&self) -> u64 {
        self.common as u64 + self.uncommon as u64 + self.rare as u64
    }
}

impl Default for RarityCounts {
    fn default() -> Self {
        RarityCounts {
            common: 11,
            uncommon: 3,
            rare: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BoosterStats {
    pub colors: ColorWeights,
    pub rarities: RarityCounts,
}

#[cfg(test)]
mod test {
    use super::RarityCounts;

    #[test]
    fn test_default_counts() {
        assert_eq!(RarityCounts::default().total(), 15);
    }

    #[test]
    fn test_total_handles_huge_counts() {
        let counts = RarityCounts {
            common: u32::MAX,
            uncommon: 1,
            rare: 0,
        };
        assert_eq!(counts.total(), u32::MAX as u64 + 1);
    }
}
