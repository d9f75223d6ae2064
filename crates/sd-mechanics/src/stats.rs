//! Effective stats: base values plus equipment bonuses.
//!
//! Every equipped item contributes both its attack and defense field. The
//! one-per-kind rule lives in the inventory; these functions sum whatever is
//! marked equipped.

use sd_core::Character;

/// Sum of the attack bonuses of all equipped items.
pub fn attack_bonus(character: &Character) -> f64 {
    character.inventory.equipped().map(|i| i.attack).sum()
}

/// Sum of the defense bonuses of all equipped items.
pub fn defense_bonus(character: &Character) -> f64 {
    character.inventory.equipped().map(|i| i.defense).sum()
}

/// Base attack plus equipment.
pub fn effective_attack(character: &Character) -> f64 {
    character.base_attack + attack_bonus(character)
}

/// Base defense plus equipment.
pub fn effective_defense(character: &Character) -> f64 {
    character.base_defense + defense_bonus(character)
}
