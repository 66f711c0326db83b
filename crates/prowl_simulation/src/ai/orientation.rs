//! Orientation controller: плавный поворот агента к точке
//!
//! Только yaw: вертикальное смещение цели игнорируется, агент никогда не
//! наклоняется. Поворот = slerp(current, look, turn_speed * dt), factor
//! зажат в [0, 1], поэтому перелёта через целевой угол нет.

use bevy::prelude::*;

/// Yaw rotation, смотрящая из `from` в `to` в горизонтальной плоскости
///
/// Bevy forward = -Z. `None` если точки совпадают по XZ (направления нет).
pub fn horizontal_look_rotation(from: Vec3, to: Vec3) -> Option<Quat> {
    let flat = Vec3::new(to.x - from.x, 0.0, to.z - from.z);
    if flat.length_squared() <= f32::EPSILON {
        return None;
    }

    let yaw = f32::atan2(-flat.x, -flat.z);
    Some(Quat::from_rotation_y(yaw))
}

/// Один тик поворота к `target`
pub fn face_towards(current: Quat, position: Vec3, target: Vec3, turn_speed: f32, delta: f32) -> Quat {
    let Some(look) = horizontal_look_rotation(position, target) else {
        return current;
    };

    let factor = (turn_speed * delta).clamp(0.0, 1.0);
    current.slerp(look, factor).normalize()
}

/// Применить поворот к Transform агента
pub fn turn_transform_towards(transform: &mut Transform, target: Vec3, turn_speed: f32, delta: f32) {
    transform.rotation = face_towards(
        transform.rotation,
        transform.translation,
        target,
        turn_speed,
        delta,
    );
}
