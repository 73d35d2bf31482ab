//! Builders for deck description files in the `back_ground` /
//! `major_arcana` YAML layout.

/// Back image used by [`deck_yaml`].
pub const BACK_IMAGE: &str = "/img/test_back.jpg";

/// YAML with `backs` back images and `cards` major arcana entries.
///
/// Card `i` is named `"Card {i}"` with face `/img/card_{i}.png`.
pub fn deck_yaml(backs: usize, cards: usize) -> String {
    let mut out = String::new();

    if backs == 0 {
        out.push_str("back_ground: []\n");
    } else {
        out.push_str("back_ground:\n");
        out.push_str(&format!("  - image_filename: {BACK_IMAGE}\n"));
        for i in 1..backs {
            out.push_str(&format!("  - image_filename: /img/test_back_{i}.jpg\n"));
        }
    }

    if cards == 0 {
        out.push_str("major_arcana: []\n");
    } else {
        out.push_str("major_arcana:\n");
        for i in 0..cards {
            out.push_str(&format!(
                "  - name: Card {i}\n    description: Meaning of card {i}\n    image_filename: /img/card_{i}.png\n"
            ));
        }
    }
    out
}

/// A valid 22-card description.
pub fn valid_deck_yaml() -> String {
    deck_yaml(1, 22)
}
