//! Ошибки конструирования (spawn / загрузка конфигов)
//!
//! Runtime ошибок у симуляции нет: missing target, sample failure и повторный
//! request деградируют в "ничего не делаем этот тик". Сюда попадает только то,
//! что хост может исправить до спавна.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("attack range {attack} exceeds chase range {chase}")]
    AttackRangeExceedsChaseRange { attack: f32, chase: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}
