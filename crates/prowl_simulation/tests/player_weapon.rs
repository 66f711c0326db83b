//! Player weapon integration test
//!
//! Проверяем:
//! - Начальное оружие спавнит visual при spawn
//! - Swap: ровно один drop старого, damage нового
//! - Атака по input с interval = attack_rate оружия
//! - Без оружия атаки нет, damage = 0

use bevy::prelude::*;
use prowl_simulation::*;

fn spawn_test_player(app: &mut App, weapon: Option<Weapon>) -> Entity {
    let player = {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::ZERO, weapon)
    };
    app.world_mut().flush();
    player
}

fn collect<E: Event + Clone>(app: &App) -> Vec<E> {
    let events = app.world().resource::<Events<E>>();
    events.get_cursor().read(events).cloned().collect()
}

fn holder(app: &App, player: Entity) -> &WeaponHolder {
    app.world().get::<WeaponHolder>(player).expect("weapon holder")
}

fn hold_attack(app: &mut App, player: Entity, held: bool) {
    app.world_mut()
        .get_mut::<PlayerInput>(player)
        .expect("player input")
        .attack_held = held;
}

#[test]
fn test_initial_weapon_spawns_visual() {
    let mut app = create_headless_app(42);
    let player = spawn_test_player(&mut app, Some(Weapon::sword()));

    run_fixed_ticks(&mut app, 1);

    let spawned = collect::<WeaponSpawned>(&app);
    assert_eq!(spawned.len(), 1);
    assert_eq!(spawned[0].entity, player);
    assert_eq!(spawned[0].attachment_point, WEAPON_ATTACHMENT_POINT);
    assert!(collect::<WeaponDropped>(&app).is_empty());

    assert_eq!(
        app.world().get::<Attachment>(player),
        Some(&Attachment::weapon("weapons/sword.prefab"))
    );
    assert_eq!(holder(&app, player).damage(), Weapon::sword().damage);
}

#[test]
fn test_weapon_swap_drops_old_once() {
    let mut app = create_headless_app(42);
    let player = spawn_test_player(&mut app, Some(Weapon::dagger()));
    run_fixed_ticks(&mut app, 1);

    app.world_mut().send_event(EquipWeaponIntent {
        entity: player,
        weapon: Weapon::axe(),
    });
    run_fixed_ticks(&mut app, 5);

    let dropped = collect::<WeaponDropped>(&app);
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].weapon, Weapon::dagger());

    let spawned: Vec<_> = collect::<WeaponSpawned>(&app).into_iter().map(|e| e.weapon.name).collect();
    assert_eq!(spawned, vec!["Dagger".to_string(), "Axe".to_string()]);

    assert_eq!(holder(&app, player).damage(), Weapon::axe().damage);
    assert_eq!(
        app.world().get::<Attachment>(player).map(|a| a.prefab_path.as_str()),
        Some("weapons/axe.prefab")
    );
}

#[test]
fn test_held_attack_respects_weapon_rate() {
    let mut app = create_headless_app(42);
    let player = spawn_test_player(&mut app, Some(Weapon::dagger()));
    hold_attack(&mut app, player, true);

    // Оружие экипируется в первом тике, атаки: ~2, ~26, ~50
    run_fixed_ticks(&mut app, 60);

    let started: Vec<_> = collect::<ActionStarted>(&app)
        .into_iter()
        .filter(|e| e.actor == player)
        .collect();
    assert_eq!(started.len(), 3);
    assert!(started.iter().all(|e| e.trigger == ATTACK_TRIGGER));

    let signals = app.world().get::<AnimatorSignals>(player).expect("signals");
    assert_eq!(signals.trigger_count(ATTACK_TRIGGER), 3);

    // Отпустили кнопку: после cooldown новых атак нет
    hold_attack(&mut app, player, false);
    run_fixed_ticks(&mut app, 60);
    let total = collect::<ActionStarted>(&app).len();
    assert_eq!(total, 3);
    assert!(!app.world().get::<ActionGate>(player).expect("gate").is_in_flight());
}

#[test]
fn test_unarmed_player_cannot_attack() {
    let mut app = create_headless_app(42);
    let player = spawn_test_player(&mut app, None);
    hold_attack(&mut app, player, true);

    run_fixed_ticks(&mut app, 60);

    assert_eq!(holder(&app, player).damage(), 0);
    assert!(collect::<ActionStarted>(&app).is_empty());
    assert!(collect::<WeaponSpawned>(&app).is_empty());
    assert!(app.world().get::<Attachment>(player).is_none());
}
