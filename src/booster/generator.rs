use std::{fmt::Debug, sync::Arc};

use rand::{seq::SliceRandom, Rng};

use crate::{
    cards::{Card, Color, Rarity},
    GenError, Res,
};

use super::{BoosterStats, RarityCounts};

/// Attempts at the weighted color draw before a rarity slot is declared
/// unsatisfiable.
pub const MAX_ATTEMPTS: u32 = 5;

/// One generated pack of cards, grouped commons, then uncommons, then rares.
pub type Booster = Vec<Card>;

pub struct BoosterGenerator {
    pool: Arc<Vec<Card>>,
    weights: Vec<(Color, f64)>,
    total_weight: f64,
    rarities: RarityCounts,
}

impl BoosterGenerator {
    pub fn new(pool: impl Into<Arc<Vec<Card>>>, stats: BoosterStats) -> Res<Self> {
        let pool = pool.into();
        if pool.is_empty() {
            return Err(GenError::InvalidConfiguration(
                "Card pool is empty.".to_string(),
            ));
        }

        let weights: Vec<(Color, f64)> = Color::ALL
            .iter()
            .map(|&color| (color, stats.colors.weight(color)))
            .collect();

        if let Some((color, weight)) = weights.iter().find(|(_, w)| *w < 0.0) {
            return Err(GenError::InvalidConfiguration(format!(
                "Negative weight {weight} for color {color:?}."
            )));
        }

        let total_weight: f64 = weights.iter().map(|(_, weight)| weight).sum();
        if total_weight <= 0.0 {
            return Err(GenError::InvalidConfiguration(format!(
                "Total color weight must be positive, got {total_weight}."
            )));
        }

        Ok(Self {
            pool,
            weights,
            total_weight,
            rarities: stats.rarities,
        })
    }

    /// Fills one booster, drawing each rarity's quota of cards in turn.
    pub fn generate(&self, rng: &mut impl Rng) -> Res<Booster> {
        let slots = [
            (Rarity::Common, self.rarities.common),
            (Rarity::Uncommon, self.rarities.uncommon),
            (Rarity::Rare, self.rarities.rare),
        ];

        // Capacity is a hint; an absurd configured count must not reserve
        // gigabytes up front.
        let mut booster = Vec::with_capacity(self.rarities.total().min(1024) as usize);
        for (rarity, count) in slots {
            for _ in 0..count {
                booster.push(self.select_card(rarity, rng)?);
            }
        }

        Ok(booster)
    }

    /// Walks the color list accumulating weights until one covers the roll.
    /// A roll landing exactly on a boundary belongs to the next color.
    fn pick_color(&self, roll: f64) -> Option<Color> {
        let mut cumulative = 0.0;
        for &(color, weight) in &self.weights {
            cumulative += weight;
            if roll < cumulative {
                return Some(color);
            }
        }
        None
    }

    fn select_card(&self, rarity: Rarity, rng: &mut impl Rng) -> Res<Card> {
        for _ in 0..MAX_ATTEMPTS {
            let roll = rng.gen_range(0.0..self.total_weight);
            let Some(color) = self.pick_color(roll) else {
                continue;
            };

            let matching: Vec<&Card> = self
                .pool
                .iter()
                .filter(|card| card.rarity == rarity && card.color == color)
                .collect();

            // An empty color/rarity cell costs an attempt; the next roll may
            // land on a different color.
            if let Some(&card) = matching.choose(rng) {
                return Ok(card.clone());
            }
        }

        Err(GenError::SelectionExhausted(rarity))
    }
}

impl Debug for BoosterGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoosterGenerator {{ pool: {} cards, total_weight: {} }}",
            self.pool.len(),
            self.total_weight
        )
    }
}
