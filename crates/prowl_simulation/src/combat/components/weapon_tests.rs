//! Tests for weapon components.

#[cfg(test)]
mod tests {
    use crate::combat::{Weapon, WeaponHolder};

    #[test]
    fn test_empty_holder_deals_no_damage() {
        let holder = WeaponHolder::default();
        assert!(holder.current().is_none());
        assert_eq!(holder.damage(), 0);
    }

    #[test]
    fn test_equip_returns_previous_weapon() {
        let mut holder = WeaponHolder::with_weapon(Weapon::sword());
        assert_eq!(holder.damage(), 3);

        let old = holder.equip(Weapon::axe());
        assert_eq!(old, Some(Weapon::sword()));
        assert_eq!(holder.damage(), 6);
        assert_eq!(holder.current().map(|w| w.name.as_str()), Some("Axe"));
    }

    #[test]
    fn test_weapon_loads_from_json() {
        let json = r#"{
            "name": "Club",
            "attack_rate": 1.1,
            "damage": 4,
            "prefab_path": "weapons/club.prefab"
        }"#;

        let weapon: Weapon = serde_json::from_str(json).expect("valid weapon json");
        assert_eq!(weapon, Weapon::new("Club", 1.1, 4, "weapons/club.prefab"));
    }
}
