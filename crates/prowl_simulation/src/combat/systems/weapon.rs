//! Weapon equip/swap system

use bevy::prelude::*;

use crate::combat::{EquipWeaponIntent, WeaponDropped, WeaponHolder, WeaponSpawned};
use crate::components::Attachment;
use crate::{log, log_error};

/// Process equip weapon intents
///
/// 1. старое оружие → `WeaponDropped` (ровно один раз)
/// 2. ссылка заменяется на новое
/// 3. visual нового сразу спавнится (`Attachment` + `WeaponSpawned`)
pub fn process_equip_weapon(
    mut commands: Commands,
    mut intents: EventReader<EquipWeaponIntent>,
    mut holders: Query<&mut WeaponHolder>,
    mut dropped_events: EventWriter<WeaponDropped>,
    mut spawned_events: EventWriter<WeaponSpawned>,
) {
    for intent in intents.read() {
        let Ok(mut holder) = holders.get_mut(intent.entity) else {
            log_error(&format!("Entity {:?} missing WeaponHolder", intent.entity));
            continue;
        };

        if let Some(old) = holder.equip(intent.weapon.clone()) {
            log(&format!("🗑️ {:?} dropped {}", intent.entity, old.name));
            dropped_events.write(WeaponDropped {
                entity: intent.entity,
                weapon: old,
            });
        }

        let attachment = Attachment::weapon(intent.weapon.prefab_path.clone());
        spawned_events.write(WeaponSpawned {
            entity: intent.entity,
            weapon: intent.weapon.clone(),
            attachment_point: attachment.attachment_point.clone(),
        });
        commands.entity(intent.entity).insert(attachment);

        log(&format!(
            "✅ {:?} equipped {} (damage {}, rate {:.2}s)",
            intent.entity, intent.weapon.name, intent.weapon.damage, intent.weapon.attack_rate
        ));
    }
}
