//! Tests for weapon equip system.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{process_equip_weapon, EquipWeaponIntent, Weapon, WeaponDropped, WeaponHolder, WeaponSpawned};
    use crate::components::{Attachment, WEAPON_ATTACHMENT_POINT};

    fn create_equip_app() -> App {
        let mut app = App::new();
        app.add_event::<EquipWeaponIntent>()
            .add_event::<WeaponDropped>()
            .add_event::<WeaponSpawned>()
            .add_systems(Update, process_equip_weapon);
        app
    }

    fn equip(app: &mut App, entity: Entity, weapon: Weapon) {
        app.world_mut().send_event(EquipWeaponIntent { entity, weapon });
        app.update();
    }

    fn collect<E: Event + Clone>(app: &App) -> Vec<E> {
        let events = app.world().resource::<Events<E>>();
        events.get_cursor().read(events).cloned().collect()
    }

    #[test]
    fn test_equip_into_empty_hands_spawns_without_drop() {
        let mut app = create_equip_app();
        let player = app.world_mut().spawn(WeaponHolder::default()).id();

        equip(&mut app, player, Weapon::sword());

        assert!(collect::<WeaponDropped>(&app).is_empty());

        let spawned = collect::<WeaponSpawned>(&app);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].weapon, Weapon::sword());
        assert_eq!(spawned[0].attachment_point, WEAPON_ATTACHMENT_POINT);

        let attachment = app.world().get::<Attachment>(player).expect("attachment inserted");
        assert_eq!(attachment, &Attachment::weapon("weapons/sword.prefab"));
        assert_eq!(app.world().get::<WeaponHolder>(player).map(|h| h.damage()), Some(3));
    }

    #[test]
    fn test_swap_drops_old_weapon_exactly_once() {
        let mut app = create_equip_app();
        let player = app
            .world_mut()
            .spawn(WeaponHolder::with_weapon(Weapon::dagger()))
            .id();

        equip(&mut app, player, Weapon::axe());

        let dropped = collect::<WeaponDropped>(&app);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].weapon, Weapon::dagger());

        let holder = app.world().get::<WeaponHolder>(player).expect("holder");
        assert_eq!(holder.current(), Some(&Weapon::axe()));
        assert_eq!(holder.damage(), 6);

        let attachment = app.world().get::<Attachment>(player).expect("attachment");
        assert_eq!(attachment.prefab_path, "weapons/axe.prefab");
    }

    #[test]
    fn test_equip_on_entity_without_holder_is_ignored() {
        let mut app = create_equip_app();
        let stranger = app.world_mut().spawn_empty().id();

        equip(&mut app, stranger, Weapon::sword());

        assert!(collect::<WeaponSpawned>(&app).is_empty());
        assert!(app.world().get::<Attachment>(stranger).is_none());
    }
}
