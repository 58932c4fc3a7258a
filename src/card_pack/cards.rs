use serde::{Serialize, Deserialize};

use crate::config::card_pack::{
    COMMON_WEIGHT, HOLOGRAPHIC_WEIGHT, RARE_WEIGHT, SUPER_RARE_WEIGHT, ULTRA_RARE_WEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Common,
    Rare,
    SuperRare,
    UltraRare,
    Holographic,
}

impl Rarity {
    /// Rarest first; this is the order the draw walks the weights in.
    pub const ALL: [Rarity; 5] = [
        Rarity::Holographic,
        Rarity::UltraRare,
        Rarity::SuperRare,
        Rarity::Rare,
        Rarity::Common,
    ];

    /// Draw weight in percent.
    pub fn weight(self) -> u32 {
        match self {
            Rarity::Holographic => HOLOGRAPHIC_WEIGHT,
            Rarity::UltraRare => ULTRA_RARE_WEIGHT,
            Rarity::SuperRare => SUPER_RARE_WEIGHT,
            Rarity::Rare => RARE_WEIGHT,
            Rarity::Common => COMMON_WEIGHT,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Holographic => "Holographic",
        }
    }

    /// Card art available for this rarity.
    pub fn images(self) -> &'static [&'static str] {
        match self {
            Rarity::Common => &["/app3/cards/common/nomal1.jpg", "/app3/cards/common/normal2.jpg"],
            Rarity::Rare => &["/app3/cards/rare/rare1.jpg", "/app3/cards/rare/rare2.jpeg"],
            Rarity::SuperRare => &["/app3/cards/super-rare/surper.jpg"],
            Rarity::UltraRare => &["/app3/cards/ultra-rare/ultra.jpg"],
            Rarity::Holographic => &["/app3/cards/holographic/holo.jpg"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub rarity: Rarity,
}

const fn card(id: u32, name: &'static str, emoji: &'static str, rarity: Rarity) -> Card {
    Card { id, name, emoji, rarity }
}

pub const CARD_DATABASE: &[Card] = &[
    card(1, "Mike", "🐱", Rarity::Common),
    card(2, "Kuro", "🐈‍⬛", Rarity::Common),
    card(3, "Shiro", "🤍", Rarity::Common),
    card(4, "Tora", "🐅", Rarity::Common),
    card(5, "Chatora", "🧡", Rarity::Common),
    card(6, "Hachiware", "🖤", Rarity::Common),
    card(7, "Persian", "😸", Rarity::Rare),
    card(8, "Maine Coon", "😺", Rarity::Rare),
    card(9, "Scottish Fold", "😻", Rarity::Rare),
    card(10, "Munchkin", "😽", Rarity::Rare),
    card(11, "Lion", "🦁", Rarity::SuperRare),
    card(12, "Tiger", "🐅", Rarity::SuperRare),
    card(13, "Leopard", "🐆", Rarity::SuperRare),
    card(14, "Cat God", "😇", Rarity::UltraRare),
    card(15, "Gold Cat", "👑", Rarity::UltraRare),
    card(16, "Rainbow Cat", "🌈", Rarity::Holographic),
    card(17, "Cosmic Cat", "✨", Rarity::Holographic),
];

pub fn cards_of(rarity: Rarity) -> impl Iterator<Item = &'static Card> {
    CARD_DATABASE.iter().filter(move |c| c.rarity == rarity)
}
