pub mod check;
pub mod export;
pub mod play;
pub mod run;

use std::path::Path;

use fg_fiction::{AdventureSession, SessionConfig, Story};

use crate::SessionArgs;

/// Load a story file, or the built-in school when no path is given.
fn load_story(path: Option<&Path>) -> Result<Story, String> {
    let Some(path) = path else {
        return Story::school().map_err(|e| format!("built-in story is invalid: {e}"));
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Story::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

/// Start a session from the shared session flags.
fn start_session(args: &SessionArgs) -> Result<AdventureSession, String> {
    let story = load_story(args.world.as_deref())?;

    let mut config = SessionConfig::default();
    if let Some(room) = &args.start {
        config = config.with_start(room.as_str());
    }
    if args.keep_playing {
        config = config.keep_playing();
    }

    AdventureSession::with_config(story, config)
        .map_err(|e| format!("failed to start session: {e}"))
}
