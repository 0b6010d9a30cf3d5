use super::types::Entity;
use crate::constants::*;

/// The enemies fought in a run, in fight order.
pub fn enemy_roster() -> Vec<Entity> {
    vec![
        Entity::new(
            LITTLE_DUDE_NAME,
            LITTLE_DUDE_HEALTH,
            LITTLE_DUDE_ATTACK,
            LITTLE_DUDE_DEFENSE,
        ),
        Entity::new(
            BIG_DUDE_NAME,
            BIG_DUDE_HEALTH,
            BIG_DUDE_ATTACK,
            BIG_DUDE_DEFENSE,
        ),
        Entity::new(
            FINAL_BOSS_NAME,
            FINAL_BOSS_HEALTH,
            FINAL_BOSS_ATTACK,
            FINAL_BOSS_DEFENSE,
        ),
    ]
}
