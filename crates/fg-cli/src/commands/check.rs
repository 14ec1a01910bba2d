use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let story = super::load_story(Some(file))?;
    let world = &story.world;

    println!("  All checks passed for '{}'.", world.meta.title);
    println!(
        "  {} rooms, {} items, {} characters with dialogue",
        world.room_count(),
        world.item_count(),
        story.dialogue.len()
    );

    Ok(())
}
