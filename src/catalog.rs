//! Gallery catalog and the card each entry renders to.

const ARTWORK_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub line: &'static str,
}

pub const CATALOG: [CatalogEntry; 10] = [
    CatalogEntry { id: 25, name: "Pikachu", line: "Sparks fly when two hearts get close." },
    CatalogEntry { id: 133, name: "Eevee", line: "Cute beginnings, endless possibilities." },
    CatalogEntry { id: 39, name: "Jigglypuff", line: "A soft song for a sweeter love." },
    CatalogEntry { id: 35, name: "Clefairy", line: "Moonlight and blush, just like your story." },
    CatalogEntry { id: 52, name: "Meowth", line: "Mischief, laughter, and love every day." },
    CatalogEntry { id: 172, name: "Pichu", line: "Small moments, big feelings." },
    CatalogEntry { id: 700, name: "Sylveon", line: "Ribbon-like bonds that hold forever." },
    CatalogEntry { id: 468, name: "Togekiss", line: "Pure joy wrapped in gentle love." },
    CatalogEntry { id: 282, name: "Gardevoir", line: "A loyal heart that always protects." },
    CatalogEntry { id: 196, name: "Espeon", line: "Soul-deep connection and quiet trust." },
];

/// Everything the stage needs to build one gallery card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    pub image_url: String,
    pub alt: String,
    pub name: &'static str,
    pub line: &'static str,
}

impl Card {
    pub const CLASS: &'static str = "poke-card reveal";
    pub const SEPARATOR: &'static str = " ❤️ ";

    pub fn caption_text(&self) -> String {
        format!("{}{}{}", self.name, Self::SEPARATOR, self.line)
    }
}

impl From<&CatalogEntry> for Card {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            image_url: format!("{ARTWORK_URL}/{}.png", entry.id),
            alt: format!("{} artwork", entry.name),
            name: entry.name,
            line: entry.line,
        }
    }
}
