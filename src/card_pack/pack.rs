use std::fmt;

use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::card_pack::cards::{CARD_DATABASE, Card, Rarity, cards_of};

/// Pick a rarity by weight: a roll in 0..100 walks the weights rarest first.
pub fn roll_rarity<R: Rng + ?Sized>(rng: &mut R) -> Rarity {
    let total: u32 = Rarity::ALL.iter().map(|r| r.weight()).sum();
    let mut roll = rng.random_range(0..total);
    for rarity in Rarity::ALL {
        if roll < rarity.weight() {
            return rarity;
        }
        roll -= rarity.weight();
    }
    Rarity::Common
}

pub fn draw_card<R: Rng + ?Sized>(rng: &mut R) -> &'static Card {
    let rarity = roll_rarity(rng);
    let pool: Vec<&'static Card> = cards_of(rarity).collect();
    // Every rarity has at least one card in the database.
    pool.choose(rng).copied().unwrap_or(&CARD_DATABASE[0])
}

/// Image path for a revealed card, `None` when the rarity has no art.
pub fn pick_image<R: Rng + ?Sized>(rng: &mut R, rarity: Rarity) -> Option<&'static str> {
    rarity.images().choose(rng).copied()
}

/// Extra effect played on reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealEffect {
    Sparkle,
    GoldenGlow,
}

impl RevealEffect {
    pub fn for_rarity(rarity: Rarity) -> Option<RevealEffect> {
        match rarity {
            Rarity::Holographic => Some(RevealEffect::Sparkle),
            Rarity::UltraRare => Some(RevealEffect::GoldenGlow),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub card: Card,
    pub image: Option<&'static str>,
    pub effect: Option<RevealEffect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    AlreadyOpened,
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::AlreadyOpened => write!(f, "pack already opened, reset it first"),
        }
    }
}

impl std::error::Error for PackError {}

/// One pack on the table: sealed until opened, then showing its card until reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PackOpening {
    #[default]
    Sealed,
    Opened(Reveal),
}

impl PackOpening {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Reveal, PackError> {
        if let PackOpening::Opened(_) = self {
            debug!("[Pack] Open ignored, pack already opened");
            return Err(PackError::AlreadyOpened);
        }

        let card = *draw_card(rng);
        let reveal = Reveal {
            card,
            image: pick_image(rng, card.rarity),
            effect: RevealEffect::for_rarity(card.rarity),
        };
        info!("[Pack] Revealed #{} {} ({})", card.id, card.name, card.rarity.display_name());

        *self = PackOpening::Opened(reveal.clone());
        Ok(reveal)
    }

    pub fn reset(&mut self) {
        *self = PackOpening::Sealed;
    }

    pub fn revealed(&self) -> Option<&Reveal> {
        match self {
            PackOpening::Opened(reveal) => Some(reveal),
            PackOpening::Sealed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = Rarity::ALL.iter().map(|r| r.weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn every_rarity_has_cards_and_art() {
        for rarity in Rarity::ALL {
            assert!(cards_of(rarity).count() > 0, "{:?} has no cards", rarity);
            assert!(!rarity.images().is_empty(), "{:?} has no art", rarity);
        }
        assert_eq!(CARD_DATABASE.len(), 17);
    }

    #[test]
    fn draw_frequencies_follow_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 20_000;
        let mut common = 0;
        let mut holo = 0;
        for _ in 0..draws {
            match draw_card(&mut rng).rarity {
                Rarity::Common => common += 1,
                Rarity::Holographic => holo += 1,
                _ => {}
            }
        }
        let common_share = common as f64 / draws as f64;
        let holo_share = holo as f64 / draws as f64;
        assert!((0.57..0.63).contains(&common_share), "common share {common_share}");
        assert!(holo_share < 0.02, "holographic share {holo_share}");
    }

    #[test]
    fn drawn_image_matches_rarity() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let card = draw_card(&mut rng);
            let image = pick_image(&mut rng, card.rarity).unwrap();
            assert!(card.rarity.images().contains(&image));
        }
    }

    #[test]
    fn pack_cannot_be_opened_twice_until_reset() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pack = PackOpening::new();
        assert!(pack.revealed().is_none());

        let card = pack.open(&mut rng).unwrap().card;
        assert_eq!(pack.open(&mut rng), Err(PackError::AlreadyOpened));
        assert_eq!(pack.revealed().map(|r| r.card), Some(card));

        pack.reset();
        assert_eq!(pack, PackOpening::Sealed);
        assert!(pack.open(&mut rng).is_ok());
    }

    #[test]
    fn rare_reveals_request_effects() {
        assert_eq!(RevealEffect::for_rarity(Rarity::Holographic), Some(RevealEffect::Sparkle));
        assert_eq!(RevealEffect::for_rarity(Rarity::UltraRare), Some(RevealEffect::GoldenGlow));
        assert_eq!(RevealEffect::for_rarity(Rarity::Common), None);
    }
}
