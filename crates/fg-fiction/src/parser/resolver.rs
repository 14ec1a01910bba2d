//! Item name resolution.
//!
//! `take`, `use`, and `examine` all go through [`resolve_item`], so a name
//! that works for one of them works the same way for the others.

use fg_core::{ItemId, World};

/// Lowercase a name and join its words with underscores, so that
/// "Rusty  Key" and `rusty_key` compare equal.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Find the first candidate whose identifier or display name contains the
/// query after normalization.
///
/// Candidates are tried in the order given; ids missing from the item table
/// never match. An empty query matches nothing.
pub fn resolve_item<'a>(
    world: &World,
    query: &str,
    candidates: impl IntoIterator<Item = &'a ItemId>,
) -> Option<&'a ItemId> {
    let needle = normalize(query);
    if needle.is_empty() {
        return None;
    }

    candidates.into_iter().find(|id| {
        world.item(id).is_some_and(|item| {
            normalize(id.as_str()).contains(&needle) || normalize(&item.name).contains(&needle)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::{Item, Room, WorldMeta};

    fn test_world() -> World {
        let mut world = World::new(WorldMeta::new("Test", "library"));
        world
            .add_room(
                Room::new("library", "Library", "")
                    .with_item("ancient_book")
                    .with_item("magic_quill"),
            )
            .unwrap();
        world
            .add_item(Item::new(
                "ancient_book",
                "Book of Forgotten Lore",
                "A tome.",
            ))
            .unwrap();
        world
            .add_item(Item::new("magic_quill", "Enchanted Quill", "A quill."))
            .unwrap();
        world
    }

    fn ids(names: &[&str]) -> Vec<ItemId> {
        names.iter().map(|n| ItemId::new(*n)).collect()
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Rusty   KEY "), "rusty_key");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn matches_id_substring() {
        let world = test_world();
        let candidates = ids(&["ancient_book", "magic_quill"]);
        let found = resolve_item(&world, "book", &candidates);
        assert_eq!(found, Some(&ItemId::new("ancient_book")));
    }

    #[test]
    fn matches_display_name_words() {
        let world = test_world();
        let candidates = ids(&["ancient_book", "magic_quill"]);
        let found = resolve_item(&world, "Forgotten Lore", &candidates);
        assert_eq!(found, Some(&ItemId::new("ancient_book")));
        let found = resolve_item(&world, "enchanted quill", &candidates);
        assert_eq!(found, Some(&ItemId::new("magic_quill")));
    }

    #[test]
    fn first_candidate_wins() {
        let world = test_world();
        // "i" appears in both ids; order decides
        let candidates = ids(&["magic_quill", "ancient_book"]);
        assert_eq!(
            resolve_item(&world, "i", &candidates),
            Some(&ItemId::new("magic_quill"))
        );
    }

    #[test]
    fn no_match_and_empty_query() {
        let world = test_world();
        let candidates = ids(&["ancient_book", "magic_quill", "ghost_item"]);
        assert_eq!(resolve_item(&world, "sword", &candidates), None);
        assert_eq!(resolve_item(&world, "   ", &candidates), None);
        assert_eq!(resolve_item(&world, "ghost", &candidates), None);
    }
}
