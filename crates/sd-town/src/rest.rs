//! Resting at the inn.

use tracing::info;

use sd_core::{Character, MAX_HEALTH};

use crate::error::{TownError, TownResult};

/// Pay `cost` gold to restore health to full.
///
/// Returns the health before resting.
pub fn rest(character: &mut Character, cost: f64) -> TownResult<f64> {
    if character.gold < cost {
        return Err(TownError::NotEnoughGold {
            needed: cost,
            available: character.gold,
        });
    }
    let before = character.health;
    character.gold -= cost;
    character.health = MAX_HEALTH;
    info!(cost, health_before = before, gold = character.gold, "rested");
    Ok(before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::Job;

    #[test]
    fn rest_restores_health() {
        let mut c = Character::new("Chad", Job::Warrior);
        c.health = 0.0;
        assert_eq!(rest(&mut c, 500.0).unwrap(), 0.0);
        assert_eq!(c.health, 100.0);
        assert_eq!(c.gold, 14500.0);
    }

    #[test]
    fn rest_at_full_health_still_charges() {
        let mut c = Character::new("Chad", Job::Warrior);
        rest(&mut c, 500.0).unwrap();
        assert_eq!(c.health, 100.0);
        assert_eq!(c.gold, 14500.0);
    }

    #[test]
    fn rest_without_gold_fails() {
        let mut c = Character::new("Chad", Job::Warrior);
        c.gold = 499.0;
        c.health = 20.0;
        assert!(matches!(rest(&mut c, 500.0), Err(TownError::NotEnoughGold { .. })));
        assert_eq!(c.health, 20.0);
        assert_eq!(c.gold, 499.0);
    }
}
