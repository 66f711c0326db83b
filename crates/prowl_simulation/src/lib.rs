//! PROWL Simulation Core
//!
//! ECS-симуляция поведения enemy агентов на Bevy 0.16 (strategic layer).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (FSM, patrol, action timing, weapons)
//! - Engine = tactical layer (pathfinding, animation, input, rendering)
//!
//! Граница проходит через contract components (`NavAgent`, `AnimatorSignals`)
//! и `NavSurface` resource. Модуль `headless` даёт детерминированные замены
//! engine layer для тестов и demo.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod error;
pub mod headless;
pub mod logger;
pub mod player;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, AgentState, AgentStateChanged, NavSurface, PatrolGoal, PatrolGoalSampled, SurfaceSampler};
pub use combat::{
    ActionCompleted, ActionGate, ActionStarted, CombatPlugin, EquipWeaponIntent, GatePhase, RequestOutcome, Weapon,
    WeaponDropped, WeaponHolder, WeaponSpawned,
};
pub use components::*;
pub use error::ConfigError;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter,
};
pub use player::{spawn_player, Player, PlayerInput, PlayerPlugin};

/// Порядок фаз внутри одного fixed тика
///
/// Timers → Input → Ai → Combat → Executors. Всё в одной цепочке, так что
/// тик полностью сериализован и детерминирован.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Отложенные продолжения: patrol waits, action gates
    Timers,
    /// Player input → intents
    Input,
    /// Классификация + state handlers
    Ai,
    /// Equip/swap
    Combat,
    /// Movement executor + animator (engine или headless)
    Executors,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Timers,
                SimulationSet::Input,
                SimulationSet::Ai,
                SimulationSet::Combat,
                SimulationSet::Executors,
            )
                .chain(),
        );

        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Подсистемы (ECS strategic layer)
            .add_plugins((AIPlugin, CombatPlugin, PlayerPlugin));

        // Seed по умолчанию, если host не выставил свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Симуляция + headless executors на плоском полу `y = 0`.
/// Время двигается только через `run_fixed_ticks`.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins((SimulationPlugin, headless::HeadlessPlugin::default()));

    app
}

/// Прогнать ровно `ticks` fixed тиков (60Hz) без real-time clock
///
/// Events не чистятся между тиками: тесты читают их накопленными
/// через `Events::<E>::get_cursor()`.
pub fn run_fixed_ticks(app: &mut App, ticks: u32) {
    for _ in 0..ticks {
        let timestep = app.world().resource::<Time<Fixed>>().timestep();
        app.world_mut().resource_mut::<Time<Fixed>>().advance_by(timestep);
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Spawn enemy агента с валидированным конфигом
///
/// Attack gate ждёт окончания "Enemy Attack" после `attack_rate`.
pub fn spawn_enemy(commands: &mut Commands, position: Vec3, config: AgentConfig) -> Result<Entity, ConfigError> {
    config.validate()?;

    let gate = ActionGate::enemy_melee(config.attack_rate);
    let entity = commands
        .spawn((Enemy, Transform::from_translation(position), config, gate))
        .id();

    log_info(&format!("👹 Enemy {:?} spawned at {:?}", entity, position));
    Ok(entity)
}
