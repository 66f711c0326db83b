//! Straight-line navigator (headless movement executor)
//!
//! Без navmesh: путь = прямая до destination. Разворот мгновенный, как у
//! navmesh agent с большим angular speed.

use bevy::prelude::*;

use crate::ai::orientation::horizontal_look_rotation;
use crate::components::NavAgent;

/// Система: двигать Transform по NavAgent и отчитываться о пути
pub fn drive_nav_agents(mut agents: Query<(&mut Transform, &mut NavAgent)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (mut transform, mut nav) in agents.iter_mut() {
        let Some(destination) = nav.destination() else {
            if nav.path_pending() || nav.has_path() {
                nav.report_path(0.0, false);
            }
            continue;
        };

        let mut remaining = transform.translation.distance(destination);

        if !nav.is_stopped() && remaining > 0.0 {
            let step = nav.speed() * delta;

            if let Some(rotation) = horizontal_look_rotation(transform.translation, destination) {
                transform.rotation = rotation;
            }

            if step >= remaining {
                transform.translation = destination;
                remaining = 0.0;
            } else {
                let direction = (destination - transform.translation) / remaining;
                transform.translation += direction * step;
                remaining -= step;
            }
        }

        nav.report_path(remaining, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_nav_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<Fixed>::from_hz(10.0))
            .add_systems(FixedUpdate, drive_nav_agents);
        app
    }

    fn step(app: &mut App) {
        let timestep = app.world().resource::<Time<Fixed>>().timestep();
        app.world_mut().resource_mut::<Time<Fixed>>().advance_by(timestep);
        app.world_mut().run_schedule(FixedUpdate);
    }

    #[test]
    fn test_moves_at_speed_and_arrives() {
        let mut app = create_nav_app();
        let mut nav = NavAgent::default();
        nav.set_destination(Vec3::new(0.0, 0.0, -2.0));
        nav.set_speed(4.0);
        nav.resume();
        let agent = app.world_mut().spawn((Transform::default(), nav)).id();

        step(&mut app);
        let transform = app.world().get::<Transform>(agent).expect("transform");
        assert!((transform.translation.z + 0.4).abs() < 1e-4);

        let nav = app.world().get::<NavAgent>(agent).expect("nav");
        assert!(!nav.path_pending());
        assert!(nav.has_path());
        assert!((nav.remaining_distance() - 1.6).abs() < 1e-4);

        for _ in 0..10 {
            step(&mut app);
        }
        let transform = app.world().get::<Transform>(agent).expect("transform");
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, -2.0));
        let nav = app.world().get::<NavAgent>(agent).expect("nav");
        assert_eq!(nav.remaining_distance(), 0.0);
    }

    #[test]
    fn test_stopped_agent_reports_without_moving() {
        let mut app = create_nav_app();
        let mut nav = NavAgent::default();
        nav.set_destination(Vec3::new(5.0, 0.0, 0.0));
        nav.stop();
        let agent = app.world_mut().spawn((Transform::default(), nav)).id();

        step(&mut app);

        assert_eq!(app.world().get::<Transform>(agent).map(|t| t.translation), Some(Vec3::ZERO));
        let nav = app.world().get::<NavAgent>(agent).expect("nav");
        assert!(!nav.path_pending());
        assert!((nav.remaining_distance() - 5.0).abs() < 1e-4);
    }
}
