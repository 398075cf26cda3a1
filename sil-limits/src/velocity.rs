//! Saturação para juntas controladas em velocidade

use std::time::Duration;
use crate::error::LimitsResult;
use crate::handle::admit;
use crate::traits::{EnforceLimits, JointAccessor};
use crate::types::{saturate, JointLimits};

/// Satura o comando de velocidade em `[-max_velocity, max_velocity]`.
#[derive(Debug, Clone)]
pub struct VelocityJointSaturationHandle<A> {
    accessor: A,
    limits: JointLimits,
}

impl<A: JointAccessor> VelocityJointSaturationHandle<A> {
    /// Cria handle. Exige limite de velocidade.
    pub fn new(accessor: A, limits: JointLimits) -> LimitsResult<Self> {
        let joint = accessor.name();
        admit(
            "velocity saturation",
            joint,
            limits.require_velocity(joint).and_then(|_| limits.validate(joint)),
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

impl<A: JointAccessor> EnforceLimits for VelocityJointSaturationHandle<A> {
    fn name(&self) -> &str {
        self.accessor.name()
    }

    fn enforce_limits(&mut self, _period: Duration) {
        let max_vel = self.limits.max_velocity;
        let vel_cmd = saturate(self.accessor.command(), -max_vel, max_vel);
        self.accessor.set_command(vel_cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LimitsError;
    use crate::joint::JointState;

    const DT: Duration = Duration::from_millis(10);

    #[test]
    fn test_requires_velocity_limits() {
        let joint = JointState::new("wheel");
        let err = VelocityJointSaturationHandle::new(&joint, JointLimits::default()).unwrap_err();
        assert_eq!(err, LimitsError::missing("wheel", "velocity"));
    }

    #[test]
    fn test_rejects_negative_max_velocity() {
        let joint = JointState::new("wheel");
        let err = VelocityJointSaturationHandle::new(&joint, JointLimits::velocity(-1.0)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_saturation() {
        let joint = JointState::new("wheel");
        let mut handle = VelocityJointSaturationHandle::new(&joint, JointLimits::velocity(1.5)).unwrap();

        joint.set_command(3.0);
        handle.enforce_limits(DT);
        assert_eq!(joint.command(), 1.5);

        joint.set_command(-3.0);
        handle.enforce_limits(DT);
        assert_eq!(joint.command(), -1.5);

        joint.set_command(0.5);
        handle.enforce_limits(DT);
        assert_eq!(joint.command(), 0.5);
    }

    #[test]
    fn test_ignores_position_and_effort() {
        let joint = JointState::with_state("wheel", 99.0, 50.0);
        joint.set_command(1.0);
        let limits = JointLimits::velocity(2.0).with_position(0.0, 1.0).with_effort(0.1);
        let mut handle = VelocityJointSaturationHandle::new(&joint, limits).unwrap();

        handle.enforce_limits(DT);
        assert_eq!(joint.command(), 1.0);
    }

    #[test]
    fn test_zero_velocity_limit_holds_still() {
        let joint = JointState::new("brake");
        joint.set_command(4.0);
        let mut handle = VelocityJointSaturationHandle::new(&joint, JointLimits::velocity(0.0)).unwrap();

        handle.enforce_limits(DT);
        assert_eq!(joint.command(), 0.0);
    }
}
