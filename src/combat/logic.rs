use super::types::Combatant;

/// Damage from one hit: attack minus defense, floored at zero.
pub fn calculate_damage(attack_power: f32, defense_power: f32) -> f32 {
    (attack_power - defense_power).max(0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    Hit {
        attacker: String,
        defender: String,
        damage: f32,
    },
}

fn strike(attacker: &dyn Combatant, defender: &mut dyn Combatant) -> CombatEvent {
    let damage = attacker.attack(defender);
    CombatEvent::Hit {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        damage,
    }
}

/// One round of an Attack choice: the player strikes first, then the enemy
/// strikes back, even if the first hit was lethal. Deaths are settled by the
/// caller afterwards. Returns the hits in order.
pub fn resolve_exchange(player: &mut dyn Combatant, enemy: &mut dyn Combatant) -> Vec<CombatEvent> {
    vec![strike(&*player, enemy), strike(&*enemy, player)]
}
