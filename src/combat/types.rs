use super::logic::calculate_damage;
use serde::{Deserialize, Serialize};

/// Anything that can take part in a fight.
///
/// Stats read through this trait are the *effective* ones: a player reports
/// its base stats plus whatever its equipped item grants.
pub trait Combatant {
    fn name(&self) -> &str;
    fn health(&self) -> f32;
    fn attack_power(&self) -> f32;
    fn defense_power(&self) -> f32;
    fn take_damage(&mut self, amount: f32);

    fn is_alive(&self) -> bool {
        self.health() > 0.0
    }

    /// Hits `defender` and returns the damage dealt, never negative.
    fn attack(&self, defender: &mut dyn Combatant) -> f32 {
        let damage = calculate_damage(self.attack_power(), defender.defense_power());
        defender.take_damage(damage);
        damage
    }
}

/// A combat participant with plain stats. Enemies are bare entities; the
/// player wraps one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Not clamped: overkill leaves it negative.
    pub health: f32,
    pub attack_power: f32,
    pub defense_power: f32,
}

impl Entity {
    pub fn new(name: impl Into<String>, health: f32, attack_power: f32, defense_power: f32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defense_power,
        }
    }
}

impl Combatant for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn attack_power(&self) -> f32 {
        self.attack_power
    }

    fn defense_power(&self) -> f32 {
        self.defense_power
    }

    fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let orc = Entity::new("Test Orc", 50.0, 10.0, 4.0);
        assert_eq!(orc.name, "Test Orc");
        assert_eq!(orc.health, 50.0);
        assert_eq!(orc.attack_power, 10.0);
        assert_eq!(orc.defense_power, 4.0);
        assert!(orc.is_alive());
    }

    #[test]
    fn test_attack_subtracts_damage_from_defender() {
        let attacker = Entity::new("Attacker", 10.0, 35.0, 0.0);
        let mut defender = Entity::new("Defender", 20.0, 0.0, 15.0);

        let dealt = attacker.attack(&mut defender);

        assert_eq!(dealt, 20.0);
        assert_eq!(defender.health, 0.0);
        assert!(!defender.is_alive());
    }

    #[test]
    fn test_attack_never_heals() {
        let attacker = Entity::new("Weakling", 10.0, 3.0, 0.0);
        let mut defender = Entity::new("Wall", 40.0, 0.0, 30.0);

        let dealt = attacker.attack(&mut defender);

        assert_eq!(dealt, 0.0);
        assert_eq!(defender.health, 40.0);
    }

    #[test]
    fn test_attack_leaves_attacker_untouched() {
        let attacker = Entity::new("Attacker", 10.0, 35.0, 5.0);
        let before = attacker.clone();
        let mut defender = Entity::new("Defender", 20.0, 0.0, 15.0);

        attacker.attack(&mut defender);

        assert_eq!(attacker, before);
    }

    #[test]
    fn test_overkill_is_not_clamped() {
        let attacker = Entity::new("Attacker", 10.0, 50.0, 0.0);
        let mut defender = Entity::new("Defender", 5.0, 0.0, 0.0);

        attacker.attack(&mut defender);

        assert_eq!(defender.health, -45.0);
        assert!(!defender.is_alive());
    }
}
