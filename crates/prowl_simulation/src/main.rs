//! Headless demo encounter PROWL
//!
//! Один enemy патрулирует, игрок появляется рядом → Chase → Attack.
//! Никакого рендера: прогресс печатается в консоль.

use bevy::prelude::*;
use prowl_simulation::headless::HeadlessAnimator;
use prowl_simulation::{
    create_headless_app, log_error, run_fixed_ticks, spawn_enemy, spawn_player, AgentConfig, AgentState,
    AnimatorSignals, Weapon, ATTACK_TRIGGER,
};

const TICKS_PER_SECOND: u32 = 60;

fn main() {
    let seed = 42;
    println!("Starting PROWL headless encounter (seed: {})", seed);

    let mut app = create_headless_app(seed);

    let (player, enemy) = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, Vec3::new(30.0, 0.0, 0.0), Some(Weapon::sword()));
        let enemy = match spawn_enemy(&mut commands, Vec3::ZERO, AgentConfig::default()) {
            Ok(enemy) => enemy,
            Err(err) => {
                log_error(&format!("Invalid enemy config: {}", err));
                return;
            }
        };
        commands.entity(enemy).insert(HeadlessAnimator::enemy(1.0));
        (player, enemy)
    };
    app.world_mut().flush();

    // 5 секунд патруля, игрок далеко
    report(&mut app, enemy, 5);

    // Игрок подходит на 4м → Chase → Attack
    let enemy_pos = position(&app, enemy);
    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
        transform.translation = enemy_pos + Vec3::new(4.0, 0.0, 0.0);
    }
    report(&mut app, enemy, 6);

    let attacks = app
        .world()
        .get::<AnimatorSignals>(enemy)
        .map_or(0, |signals| signals.trigger_count(ATTACK_TRIGGER));
    println!("Encounter complete: enemy attack triggers = {}", attacks);
}

fn position(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .map_or(Vec3::ZERO, |transform| transform.translation)
}

fn report(app: &mut App, enemy: Entity, seconds: u32) {
    for _ in 0..seconds {
        run_fixed_ticks(app, TICKS_PER_SECOND);

        let state = app
            .world()
            .get::<AgentState>(enemy)
            .copied()
            .unwrap_or_default();
        println!("  enemy {:<6} at {:?}", state.as_str(), position(app, enemy));
    }
}
