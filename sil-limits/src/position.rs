//! Limites suaves para juntas controladas em posição

use std::time::Duration;
use crate::error::LimitsResult;
use crate::handle::admit;
use crate::traits::{EnforceLimits, JointAccessor};
use crate::types::{saturate, soft_velocity_bounds, JointLimits, SoftJointLimits};

/// Aplica limites de posição e velocidade a uma junta controlada em posição.
///
/// A velocidade permitida encolhe proporcionalmente (ganho `k_position`) à
/// medida que a junta se aproxima de um limite suave, e inverte de sinal além
/// dele. O intervalo de posição do ciclo é essa velocidade integrada sobre o
/// período, com os limites rígidos como último recurso.
#[derive(Debug, Clone)]
pub struct PositionJointSoftLimitsHandle<A> {
    accessor: A,
    limits: JointLimits,
    soft_limits: SoftJointLimits,
}

impl<A: JointAccessor> PositionJointSoftLimitsHandle<A> {
    /// Cria handle. Exige limite de velocidade.
    pub fn new(accessor: A, limits: JointLimits, soft_limits: SoftJointLimits) -> LimitsResult<Self> {
        let joint = accessor.name();
        admit(
            "position soft limits",
            joint,
            limits
                .require_velocity(joint)
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

impl<A: JointAccessor> EnforceLimits for PositionJointSoftLimitsHandle<A> {
    fn name(&self) -> &str {
        self.accessor.name()
    }

    /// # Panics
    ///
    /// Se `period` for zero.
    fn enforce_limits(&mut self, period: Duration) {
        assert!(!period.is_zero(), "control period must be positive");

        let pos = self.accessor.position();
        let (soft_min_vel, soft_max_vel) = soft_velocity_bounds(&self.limits, &self.soft_limits, pos);

        let dt = period.as_secs_f64();
        let mut pos_low = pos + soft_min_vel * dt;
        let mut pos_high = pos + soft_max_vel * dt;

        if self.limits.has_position_limits {
            // Limite suave configurado além do rígido
            pos_low = pos_low.max(self.limits.min_position);
            pos_high = pos_high.min(self.limits.max_position);
        }

        let pos_cmd = saturate(self.accessor.command(), pos_low, pos_high);
        self.accessor.set_command(pos_cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LimitsError;
    use crate::joint::JointState;

    const DT: Duration = Duration::from_millis(100);

    fn limits() -> JointLimits {
        JointLimits::velocity(2.0).with_position(0.0, 1.0)
    }

    fn soft() -> SoftJointLimits {
        SoftJointLimits::new(10.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_requires_velocity_limits() {
        let joint = JointState::new("elbow");
        let no_vel = JointLimits::default().with_position(0.0, 1.0);
        let err = PositionJointSoftLimitsHandle::new(&joint, no_vel, soft()).unwrap_err();
        assert_eq!(err, LimitsError::missing("elbow", "velocity"));
    }

    #[test]
    fn test_rejects_invalid_soft_limits() {
        let joint = JointState::new("elbow");
        let bad = SoftJointLimits::new(10.0, 0.0, 1.0, 0.0);
        let err = PositionJointSoftLimitsHandle::new(&joint, limits(), bad).unwrap_err();
        assert!(matches!(err, LimitsError::InvalidLimits { .. }));
    }

    #[test]
    fn test_approaching_upper_limit() {
        // soft_max_vel = 0.5, pos_high = 0.95 + 0.05 = 1.0
        let joint = JointState::with_state("elbow", 0.95, 0.0);
        joint.set_command(2.0);
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();

        handle.enforce_limits(DT);
        assert!((joint.command() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_command_within_envelope_untouched() {
        let joint = JointState::with_state("elbow", 0.5, 0.0);
        joint.set_command(0.55);
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();

        handle.enforce_limits(DT);
        assert_eq!(joint.command(), 0.55);
    }

    #[test]
    fn test_velocity_limit_bounds_step() {
        // Longe dos limites: passo máximo = max_velocity * dt
        let joint = JointState::with_state("elbow", 0.5, 0.0);
        joint.set_command(0.9);
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();

        handle.enforce_limits(DT);
        assert!((joint.command() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_without_position_limits() {
        let joint = JointState::with_state("wheel", 100.0, 0.0);
        joint.set_command(200.0);
        let mut handle =
            PositionJointSoftLimitsHandle::new(&joint, JointLimits::velocity(2.0), soft()).unwrap();

        handle.enforce_limits(DT);
        assert!((joint.command() - 100.2).abs() < 1e-9);
    }

    #[test]
    fn test_soft_limit_beyond_hard_limit_is_backstopped() {
        let joint = JointState::with_state("elbow", 0.99, 0.0);
        joint.set_command(5.0);
        let wide = SoftJointLimits::new(10.0, 0.0, -1.0, 3.0);
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), wide).unwrap();

        handle.enforce_limits(DT);
        assert_eq!(joint.command(), 1.0);
    }

    #[test]
    fn test_past_soft_limit_pulls_back() {
        let joint = JointState::with_state("elbow", 0.95, 0.0);
        joint.set_command(0.95);
        let narrow = SoftJointLimits::new(10.0, 0.0, 0.1, 0.9);
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), narrow).unwrap();

        // soft_max_vel = -0.5, pos_high = 0.90
        handle.enforce_limits(DT);
        assert!((joint.command() - 0.90).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_envelope_resolves_to_upper_bound() {
        // Ganho negativo empurra pos_high abaixo de min_position
        let joint = JointState::with_state("elbow", 0.01, 0.0);
        joint.set_command(0.5);
        let negative = SoftJointLimits::new(-10.0, 0.0, 0.0, 1.0);
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), negative).unwrap();

        handle.enforce_limits(DT);
        assert!((joint.command() - (0.01 - 0.2)).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "control period must be positive")]
    fn test_zero_period_panics() {
        let joint = JointState::new("elbow");
        let mut handle = PositionJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();
        handle.enforce_limits(Duration::ZERO);
    }

    #[test]
    fn test_name_from_accessor() {
        let joint = JointState::new("shoulder");
        let handle = PositionJointSoftLimitsHandle::new(&joint, limits(), soft()).unwrap();
        assert_eq!(handle.name(), "shoulder");
        assert_eq!(handle.limits().max_velocity, 2.0);
        assert_eq!(handle.soft_limits().k_position, 10.0);
    }
}
