//! Soma fechada dos handles e validação de construção

use std::time::Duration;
use tracing::{debug, warn};
use crate::effort::{EffortJointSaturationHandle, EffortJointSoftLimitsHandle};
use crate::error::LimitsResult;
use crate::position::PositionJointSoftLimitsHandle;
use crate::traits::{EnforceLimits, JointAccessor};
use crate::velocity::VelocityJointSaturationHandle;

/// Registra o resultado da validação de um handle em construção.
pub(crate) fn admit(kind: &str, joint: &str, checked: LimitsResult<()>) -> LimitsResult<()> {
    match checked {
        Ok(()) => {
            debug!(joint, kind, "limits handle created");
            Ok(())
        }
        Err(err) => {
            warn!(joint, kind, error = %err, "limits handle rejected");
            Err(err)
        }
    }
}

/// Qualquer handle de limites, com despacho estático.
///
/// Para registros que misturam modos de controle sem `dyn`.
#[derive(Debug, Clone)]
pub enum AnyLimitsHandle<A> {
    /// Limites suaves em posição
    Position(PositionJointSoftLimitsHandle<A>),
    /// Limites suaves em esforço
    Effort(EffortJointSoftLimitsHandle<A>),
    /// Saturação de velocidade
    Velocity(VelocityJointSaturationHandle<A>),
    /// Saturação de esforço
    EffortSaturation(EffortJointSaturationHandle<A>),
}

impl<A: JointAccessor> AnyLimitsHandle<A> {
    /// Nome curto do modo de controle
    pub fn kind(&self) -> &'static str {
        match self {
            AnyLimitsHandle::Position(_) => "position",
            AnyLimitsHandle::Effort(_) => "effort",
            AnyLimitsHandle::Velocity(_) => "velocity",
            AnyLimitsHandle::EffortSaturation(_) => "effort_saturation",
        }
    }
}

impl<A: JointAccessor> EnforceLimits for AnyLimitsHandle<A> {
    fn name(&self) -> &str {
        match self {
            AnyLimitsHandle::Position(h) => h.name(),
            AnyLimitsHandle::Effort(h) => h.name(),
            AnyLimitsHandle::Velocity(h) => h.name(),
            AnyLimitsHandle::EffortSaturation(h) => h.name(),
        }
    }

    #[inline]
    fn enforce_limits(&mut self, period: Duration) {
        match self {
            AnyLimitsHandle::Position(h) => h.enforce_limits(period),
            AnyLimitsHandle::Effort(h) => h.enforce_limits(period),
            AnyLimitsHandle::Velocity(h) => h.enforce_limits(period),
            AnyLimitsHandle::EffortSaturation(h) => h.enforce_limits(period),
        }
    }
}

impl<A> From<PositionJointSoftLimitsHandle<A>> for AnyLimitsHandle<A> {
    fn from(handle: PositionJointSoftLimitsHandle<A>) -> Self {
        AnyLimitsHandle::Position(handle)
    }
}

impl<A> From<EffortJointSoftLimitsHandle<A>> for AnyLimitsHandle<A> {
    fn from(handle: EffortJointSoftLimitsHandle<A>) -> Self {
        AnyLimitsHandle::Effort(handle)
    }
}

impl<A> From<VelocityJointSaturationHandle<A>> for AnyLimitsHandle<A> {
    fn from(handle: VelocityJointSaturationHandle<A>) -> Self {
        AnyLimitsHandle::Velocity(handle)
    }
}

impl<A> From<EffortJointSaturationHandle<A>> for AnyLimitsHandle<A> {
    fn from(handle: EffortJointSaturationHandle<A>) -> Self {
        AnyLimitsHandle::EffortSaturation(handle)
    }
}
