//! Tipos de dados para limites de junta

use serde::{Deserialize, Serialize};
use crate::error::{LimitsError, LimitsResult};

/// Satura `value` no intervalo fechado `[min, max]`.
///
/// Não valida `min <= max`: com intervalo invertido o resultado é `max`.
/// Por isso não usa `f64::clamp`, que entra em pânico nesse caso.
#[inline]
pub fn saturate(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Limites rígidos (físicos) de uma junta
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointLimits {
    /// Limites de posição presentes?
    pub has_position_limits: bool,
    /// Posição mínima (rad ou m)
    pub min_position: f64,
    /// Posição máxima (rad ou m)
    pub max_position: f64,
    /// Limite de velocidade presente?
    pub has_velocity_limits: bool,
    /// Velocidade máxima (valor absoluto)
    pub max_velocity: f64,
    /// Limite de esforço presente?
    pub has_effort_limits: bool,
    /// Esforço máximo (valor absoluto)
    pub max_effort: f64,
}

impl JointLimits {
    /// Cria limites só com velocidade
    pub fn velocity(max_velocity: f64) -> Self {
        Self {
            has_velocity_limits: true,
            max_velocity,
            ..Default::default()
        }
    }

    /// Adiciona limites de posição
    pub fn with_position(mut self, min_position: f64, max_position: f64) -> Self {
        self.has_position_limits = true;
        self.min_position = min_position;
        self.max_position = max_position;
        self
    }

    /// Adiciona limite de esforço
    pub fn with_effort(mut self, max_effort: f64) -> Self {
        self.has_effort_limits = true;
        self.max_effort = max_effort;
        self
    }

    /// Exige limite de velocidade
    pub fn require_velocity(&self, joint: &str) -> LimitsResult<()> {
        if !self.has_velocity_limits {
            return Err(LimitsError::missing(joint, "velocity"));
        }
        Ok(())
    }

    /// Exige limite de esforço
    pub fn require_effort(&self, joint: &str) -> LimitsResult<()> {
        if !self.has_effort_limits {
            return Err(LimitsError::missing(joint, "effort"));
        }
        Ok(())
    }

    /// Valida os valores das famílias presentes
    pub fn validate(&self, joint: &str) -> LimitsResult<()> {
        if self.has_velocity_limits {
            if !self.max_velocity.is_finite() {
                return Err(LimitsError::invalid(joint, "max_velocity must be finite"));
            }
            if self.max_velocity < 0.0 {
                return Err(LimitsError::invalid(joint, format!(
                    "max_velocity must be non-negative, got {}",
                    self.max_velocity
                )));
            }
        }

        if self.has_effort_limits {
            if !self.max_effort.is_finite() {
                return Err(LimitsError::invalid(joint, "max_effort must be finite"));
            }
            if self.max_effort < 0.0 {
                return Err(LimitsError::invalid(joint, format!(
                    "max_effort must be non-negative, got {}",
                    self.max_effort
                )));
            }
        }

        if self.has_position_limits {
            if !self.min_position.is_finite() || !self.max_position.is_finite() {
                return Err(LimitsError::invalid(joint, "position limits must be finite"));
            }
            if self.min_position > self.max_position {
                return Err(LimitsError::invalid(joint, format!(
                    "min_position ({}) exceeds max_position ({})",
                    self.min_position, self.max_position
                )));
            }
        }

        Ok(())
    }
}

/// Parâmetros de limites suaves
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoftJointLimits {
    /// Ganho posição → velocidade
    pub k_position: f64,
    /// Ganho velocidade → esforço
    pub k_velocity: f64,
    /// Posição suave mínima
    pub min_position: f64,
    /// Posição suave máxima
    pub max_position: f64,
}

impl SoftJointLimits {
    /// Cria novos limites suaves
    pub fn new(k_position: f64, k_velocity: f64, min_position: f64, max_position: f64) -> Self {
        Self {
            k_position,
            k_velocity,
            min_position,
            max_position,
        }
    }

    /// Valida os parâmetros. Ganhos negativos são aceitos.
    pub fn validate(&self, joint: &str) -> LimitsResult<()> {
        let values = [self.k_position, self.k_velocity, self.min_position, self.max_position];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(LimitsError::invalid(joint, "soft limits must be finite"));
        }
        if self.min_position > self.max_position {
            return Err(LimitsError::invalid(joint, format!(
                "soft min_position ({}) exceeds soft max_position ({})",
                self.min_position, self.max_position
            )));
        }
        Ok(())
    }
}

/// Limites de velocidade derivados da proximidade aos limites suaves.
///
/// Sem limites de posição o resultado é `[-max_velocity, max_velocity]`.
#[inline]
pub(crate) fn soft_velocity_bounds(
    limits: &JointLimits,
    soft: &SoftJointLimits,
    pos: f64,
) -> (f64, f64) {
    let max_vel = limits.max_velocity;
    if !limits.has_position_limits {
        return (-max_vel, max_vel);
    }

    let min_vel = saturate(-soft.k_position * (pos - soft.min_position), -max_vel, max_vel);
    let max_vel_bound = saturate(-soft.k_position * (pos - soft.max_position), -max_vel, max_vel);
    (min_vel, max_vel_bound)
}
