//! Limites para juntas controladas em esforço (torque/força)

use std::time::Duration;
use crate::error::LimitsResult;
use crate::handle::admit;
use crate::traits::{EnforceLimits, JointAccessor};
use crate::types::{saturate, soft_velocity_bounds, JointLimits, SoftJointLimits};

/// Aplica limites suaves de posição, velocidade e esforço a uma junta
/// controlada em esforço.
///
/// Os limites de velocidade vêm da proximidade aos limites suaves de posição
/// (ganho `k_position`); os de esforço, do excesso de velocidade medida sobre
/// esses limites (ganho `k_velocity`). Independe do período do ciclo.
#[derive(Debug, Clone)]
pub struct EffortJointSoftLimitsHandle<A> {
    accessor: A,
    limits: JointLimits,
    soft_limits: SoftJointLimits,
}

impl<A: JointAccessor> EffortJointSoftLimitsHandle<A> {
    /// Cria handle. Exige limites de velocidade e de esforço.
    pub fn new(accessor: A, limits: JointLimits, soft_limits: SoftJointLimits) -> LimitsResult<Self> {
        let joint = accessor.name();
        admit(
            "effort soft limits",
            joint,
            limits
                .require_velocity(joint)
                .and_then(|_| limits.require_effort(joint))
                .and_then(|_| limits.validate(joint))
                .and_then(|_| soft_limits.validate(joint)),
        )?;

        Ok(Self {
            accessor,
            limits,
            soft_limits,
        })
    }

    /// Limites rígidos
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Limites suaves
    pub fn soft_limits(&self) -> &SoftJointLimits {
        &self.soft_limits
    }

    /// Acessor da junta
    pub fn accessor(&self) -> &A {
        &self.accessor
    }
}

impl<A: JointAccessor> EnforceLimits for EffortJointSoftLimitsHandle<A> {
    fn name(&self) -> &str {
        self.accessor.name()
    }

    fn enforce_limits(&mut self, _period: Duration) {
        let pos = self.accessor.position();
        let vel = self.accessor.velocity();

        let (soft_min_vel, soft_max_vel) = soft_velocity_bounds(&self.limits, &self.soft_limits, pos);

        let max_eff = self.limits.max_effort;
        let k_vel = self.soft_limits.k_velocity;
        let soft_min_eff = saturate(-k_vel * (vel - soft_min_vel), -max_eff, max_eff);
        let soft_max_eff = saturate(-k_vel * (vel - soft_max_vel), -max_eff, max_eff);

        let eff_cmd = saturate(self.accessor.command(), soft_min_eff, soft_max_eff);
        self.accessor.set_command(eff_cmd);
    }
}

/// Satura o esforço de uma junta sem limites suaves.
///
/// Além de `[-max_effort, max_effort]`, anula o esforço que empurraria a
/// junta para além de um limite de posição já ultrapassado ou que aumentaria
/// uma velocidade já acima do limite.
#[derive(Debug, Clone)]
pub struct EffortJointSaturationHandle<A> {
    accessor: A,
    limits: JointLimits,
}

impl<A: JointAccessor> EffortJointSaturationHandle<A> {
    /// Cria handle. Exige limites de velocidade e de esforço.
    pub fn new(accessor: A, limits: JointLimits) -> LimitsResult<Self> {
        let joint = accessor.name();
        admit(
            "effort saturation",
            joint,
            limits
                .require_velocity(joint)
                .and_then(|_| limits.require_effort(joint))
                .and_then(|_| limits.validate(joint)),
        )?;

        Ok(Self { accessor, limits })
    }

    /// Limites rígidos
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Acessor da junta
    pub fn accessor(&self) -> &A {
        &self.accessor
    }
}

impl<A: JointAccessor> EnforceLimits for EffortJointSaturationHandle<A> {
    fn name(&self) -> &str {
        self.accessor.name()
    }

    fn enforce_limits(&mut self, _period: Duration) {
        let mut min_eff = -self.limits.max_effort;
        let mut max_eff = self.limits.max_effort;

        if self.limits.has_position_limits {
            let pos = self.accessor.position();
            if pos < self.limits.min_position {
                min_eff = 0.0;
            } else if pos > self.limits.max_position {
                max_eff = 0.0;
            }
        }

        let vel = self.accessor.velocity();
        if vel < -self.limits.max_velocity {
            min_eff = 0.0;
        } else if vel > self.limits.max_velocity {
            max_eff = 0.0;
        }

        let eff_cmd = saturate(self.accessor.command(), min_eff, max_eff);
        self.accessor.set_command(eff_cmd);
    }
}
