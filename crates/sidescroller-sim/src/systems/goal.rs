//! Level exit check.

use hecs::World;

use crate::queries;

/// True when the player's box overlaps the flagpole's.
pub fn reached_flagpole(world: &World) -> bool {
    match (queries::player_body(world), queries::flagpole_box(world)) {
        (Some(player), Some(flagpole)) => player.overlaps(&flagpole),
        _ => false,
    }
}
