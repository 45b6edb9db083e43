//! Static emoji catalog
//!
//! The fixed table of emoji/hiragana/category triples the game draws from.
//! Items are immutable domain data loaded once; entities hold copies.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;

/// Emoji category, labeled with its hiragana reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Animal,
    Food,
    Vehicle,
    Nature,
    Object,
}

impl Category {
    /// Hiragana reading shown to the child
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animal => "どうぶつ",
            Category::Food => "たべもの",
            Category::Vehicle => "のりもの",
            Category::Nature => "しぜん",
            Category::Object => "もの",
        }
    }
}

/// One selectable emoji with its hiragana reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiItem {
    /// Table index, unique and stable for the process lifetime
    pub id: u32,
    /// The emoji glyph itself
    pub glyph: &'static str,
    /// Hiragana reading, spoken aloud on selection
    pub label: &'static str,
    pub category: Category,
}

use Category::{Animal, Food, Nature, Object, Vehicle};

/// Raw table data, grouped by category. Ids are assigned from table order.
static RAW_TABLE: &[(&str, &str, Category)] = &[
    // Animals
    ("🐶", "いぬ", Animal),
    ("🐱", "ねこ", Animal),
    ("🐰", "うさぎ", Animal),
    ("🐻", "くま", Animal),
    ("🐼", "ぱんだ", Animal),
    ("🐘", "ぞう", Animal),
    ("🦁", "らいおん", Animal),
    ("🐭", "ねずみ", Animal),
    ("🐸", "かえる", Animal),
    ("🐢", "かめ", Animal),
    ("🐦", "とり", Animal),
    ("🐟", "さかな", Animal),
    ("🐴", "うま", Animal),
    ("🐵", "さる", Animal),
    ("🐮", "うし", Animal),
    // Food
    ("🍎", "りんご", Food),
    ("🍌", "ばなな", Food),
    ("🍇", "ぶどう", Food),
    ("🍓", "いちご", Food),
    ("🍊", "みかん", Food),
    ("🍞", "ぱん", Food),
    ("🍚", "ごはん", Food),
    ("🍜", "らーめん", Food),
    ("🍙", "おにぎり", Food),
    ("🍰", "けーき", Food),
    ("🍦", "あいす", Food),
    ("🥚", "たまご", Food),
    ("🍅", "とまと", Food),
    // Vehicles
    ("🚗", "くるま", Vehicle),
    ("🚌", "ばす", Vehicle),
    ("🚑", "きゅうきゅうしゃ", Vehicle),
    ("🚒", "しょうぼうしゃ", Vehicle),
    ("🚓", "ぱとかー", Vehicle),
    ("🚲", "じてんしゃ", Vehicle),
    ("🚃", "でんしゃ", Vehicle),
    ("🚀", "ろけっと", Vehicle),
    ("✈️", "ひこうき", Vehicle),
    ("🚁", "へりこぷたー", Vehicle),
    ("🚢", "ふね", Vehicle),
    // Nature
    ("🌸", "さくら", Nature),
    ("🌻", "ひまわり", Nature),
    ("🌈", "にじ", Nature),
    ("⭐", "ほし", Nature),
    ("🌙", "つき", Nature),
    ("☀️", "たいよう", Nature),
    ("☁️", "くも", Nature),
    ("🌊", "うみ", Nature),
    ("⛰️", "やま", Nature),
    ("🌳", "き", Nature),
    ("❄️", "ゆき", Nature),
    ("🌧️", "あめ", Nature),
    // Objects
    ("⚽", "ぼーる", Object),
    ("📖", "ほん", Object),
    ("🎩", "ぼうし", Object),
    ("👟", "くつ", Object),
    ("☂️", "かさ", Object),
    ("🎈", "ふうせん", Object),
    ("⏰", "とけい", Object),
    ("🎁", "ぷれぜんと", Object),
    ("🧸", "ぬいぐるみ", Object),
    ("🔑", "かぎ", Object),
    ("✏️", "えんぴつ", Object),
];

static EMOJI_TABLE: LazyLock<Vec<EmojiItem>> = LazyLock::new(|| {
    RAW_TABLE
        .iter()
        .enumerate()
        .map(|(i, &(glyph, label, category))| EmojiItem {
            id: i as u32,
            glyph,
            label,
            category,
        })
        .collect()
});

/// All catalog items in fixed table order
pub fn all_items() -> &'static [EmojiItem] {
    &EMOJI_TABLE
}

/// Draw `n` distinct items, order randomized.
///
/// `n` is clamped to the catalog size.
pub fn random_sample<R: Rng>(n: usize, rng: &mut R) -> Vec<EmojiItem> {
    let mut pool: Vec<EmojiItem> = EMOJI_TABLE.to_vec();
    pool.shuffle(rng);
    pool.truncate(n.min(EMOJI_TABLE.len()));
    pool
}

/// Uniform single pick (home screen emoji of the moment)
pub fn random_item<R: Rng>(rng: &mut R) -> EmojiItem {
    EMOJI_TABLE[rng.random_range(0..EMOJI_TABLE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_table_is_nonempty_with_unique_glyphs() {
        let items = all_items();
        assert!(items.len() >= 10);
        for (i, a) in items.iter().enumerate() {
            assert!(!a.glyph.is_empty());
            assert!(!a.label.is_empty());
            assert_eq!(a.id as usize, i);
            for b in &items[i + 1..] {
                assert_ne!(a.glyph, b.glyph, "duplicate glyph {}", a.glyph);
            }
        }
    }

    #[test]
    fn test_every_category_is_represented() {
        let items = all_items();
        for cat in [
            Category::Animal,
            Category::Food,
            Category::Vehicle,
            Category::Nature,
            Category::Object,
        ] {
            assert!(items.iter().any(|i| i.category == cat));
        }
    }

    #[test]
    fn test_random_sample_distinct() {
        let mut rng = Pcg32::seed_from_u64(7);
        let sample = random_sample(10, &mut rng);
        assert_eq!(sample.len(), 10);
        for (i, a) in sample.iter().enumerate() {
            for b in &sample[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_random_sample_clamps_to_catalog_size() {
        let mut rng = Pcg32::seed_from_u64(7);
        let sample = random_sample(all_items().len() + 100, &mut rng);
        assert_eq!(sample.len(), all_items().len());
    }

    #[test]
    fn test_random_sample_draws_from_catalog() {
        let mut rng = Pcg32::seed_from_u64(42);
        for item in random_sample(10, &mut rng) {
            assert_eq!(all_items()[item.id as usize], item);
        }
    }
}
