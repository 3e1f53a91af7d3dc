//! Items carried by the player.

use bevy::prelude::Component;
use log::{debug, info};

use crate::components::PickupKind;

/// Result of trying to swing the weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponUse {
    /// No weapon in hand or no uses left; the weapon has been put away.
    OutOfUses,
    /// The weapon swung.
    Swung {
        /// Uses left after this swing. Zero means the weapon broke.
        remaining: u32,
    },
}

/// Candy and weapon state.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    holding_candy: bool,
    has_weapon: bool,
    weapon_equipped: bool,
    weapon_uses: u32,
}

impl Inventory {
    /// Adds a collected item.
    ///
    /// A weapon arrives holstered with `weapon_uses` charges, replacing any
    /// weapon already carried.
    pub fn pick_up(&mut self, kind: PickupKind, weapon_uses: u32) {
        match kind {
            PickupKind::Candy => {
                self.holding_candy = true;
                info!("picked up candy");
            }
            PickupKind::Weapon => {
                self.has_weapon = true;
                self.weapon_uses = weapon_uses;
                self.weapon_equipped = false;
                info!("picked up weapon with {weapon_uses} uses");
            }
        }
    }

    /// Draws or holsters the weapon.
    ///
    /// Returns the new equipped state, or `None` when there is no weapon.
    pub fn toggle_equip(&mut self) -> Option<bool> {
        if !self.has_weapon {
            return None;
        }
        self.weapon_equipped = !self.weapon_equipped;
        debug!(
            "weapon {}",
            if self.weapon_equipped {
                "equipped"
            } else {
                "unequipped"
            }
        );
        Some(self.weapon_equipped)
    }

    /// Spends one weapon charge.
    ///
    /// Swinging with no charges disarms the player. The swing that spends
    /// the last charge also disarms.
    pub fn use_weapon(&mut self) -> WeaponUse {
        if !self.has_weapon || self.weapon_uses == 0 {
            self.disarm();
            info!("weapon out of uses");
            return WeaponUse::OutOfUses;
        }
        self.weapon_uses -= 1;
        let remaining = self.weapon_uses;
        if remaining == 0 {
            self.disarm();
            info!("weapon depleted");
        } else {
            debug!("weapon used; {remaining} uses left");
        }
        WeaponUse::Swung { remaining }
    }

    const fn disarm(&mut self) {
        self.has_weapon = false;
        self.weapon_equipped = false;
        self.weapon_uses = 0;
    }

    /// Whether candy is being carried.
    #[must_use]
    pub const fn holding_candy(&self) -> bool {
        self.holding_candy
    }

    /// Whether a weapon is carried.
    #[must_use]
    pub const fn has_weapon(&self) -> bool {
        self.has_weapon
    }

    /// Whether the weapon is in hand.
    #[must_use]
    pub const fn weapon_equipped(&self) -> bool {
        self.weapon_equipped
    }

    /// Charges left on the weapon.
    #[must_use]
    pub const fn weapon_uses(&self) -> u32 {
        self.weapon_uses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn armed() -> Inventory {
        let mut inventory = Inventory::default();
        inventory.pick_up(PickupKind::Weapon, 2);
        inventory
    }

    #[rstest]
    fn weapon_arrives_holstered(armed: Inventory) {
        assert!(armed.has_weapon());
        assert!(!armed.weapon_equipped());
        assert_eq!(armed.weapon_uses(), 2);
    }

    #[test]
    fn toggle_without_weapon_does_nothing() {
        let mut inventory = Inventory::default();
        assert_eq!(inventory.toggle_equip(), None);
        assert!(!inventory.weapon_equipped());
    }

    #[rstest]
    fn toggle_flips_equipped(mut armed: Inventory) {
        assert_eq!(armed.toggle_equip(), Some(true));
        assert_eq!(armed.toggle_equip(), Some(false));
    }

    #[rstest]
    fn last_charge_depletes_weapon(mut armed: Inventory) {
        armed.toggle_equip();
        assert_eq!(armed.use_weapon(), WeaponUse::Swung { remaining: 1 });
        assert!(armed.weapon_equipped());
        assert_eq!(armed.use_weapon(), WeaponUse::Swung { remaining: 0 });
        assert!(!armed.has_weapon());
        assert!(!armed.weapon_equipped());
        assert_eq!(armed.use_weapon(), WeaponUse::OutOfUses);
    }

    #[test]
    fn candy_is_kept() {
        let mut inventory = Inventory::default();
        inventory.pick_up(PickupKind::Candy, 0);
        assert!(inventory.holding_candy());
        assert!(!inventory.has_weapon());
    }
}
