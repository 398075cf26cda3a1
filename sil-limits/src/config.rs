//! Configuração de limites a partir de JSON
//!
//! ```json
//! {
//!   "joints": {
//!     "elbow": {
//!       "has_velocity_limits": true, "max_velocity": 2.0,
//!       "has_position_limits": true, "min_position": 0.0, "max_position": 1.0,
//!       "soft_limits": {
//!         "k_position": 10.0, "k_velocity": 5.0,
//!         "soft_lower_limit": 0.05, "soft_upper_limit": 0.95
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Flags ausentes valem `false`. Valor sem a flag correspondente é ignorado;
//! flag sem valor é erro de configuração.

use std::collections::BTreeMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::effort::{EffortJointSaturationHandle, EffortJointSoftLimitsHandle};
use crate::error::{LimitsError, LimitsResult};
use crate::position::PositionJointSoftLimitsHandle;
use crate::traits::JointAccessor;
use crate::types::{JointLimits, SoftJointLimits};
use crate::velocity::VelocityJointSaturationHandle;

/// Entrada de limites de uma junta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointLimitsEntry {
    #[serde(default)]
    pub has_position_limits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_position: Option<f64>,
    #[serde(default)]
    pub has_velocity_limits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_velocity: Option<f64>,
    #[serde(default)]
    pub has_effort_limits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_effort: Option<f64>,
    /// Parâmetros de limites suaves (opcional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_limits: Option<SoftLimitsEntry>,
}

/// Entrada de limites suaves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoftLimitsEntry {
    pub k_position: f64,
    #[serde(default)]
    pub k_velocity: f64,
    pub soft_lower_limit: f64,
    pub soft_upper_limit: f64,
}

impl From<SoftLimitsEntry> for SoftJointLimits {
    fn from(entry: SoftLimitsEntry) -> Self {
        SoftJointLimits::new(
            entry.k_position,
            entry.k_velocity,
            entry.soft_lower_limit,
            entry.soft_upper_limit,
        )
    }
}

/// Exige o valor de uma família habilitada
fn required(joint: &str, field: &str, value: Option<f64>) -> LimitsResult<f64> {
    value.ok_or_else(|| {
        LimitsError::Config(format!("joint '{}' enables {} but gives no value", joint, field))
    })
}

impl JointLimitsEntry {
    /// Converte em limites rígidos
    pub fn to_limits(&self, joint: &str) -> LimitsResult<JointLimits> {
        let mut limits = JointLimits::default();

        if self.has_position_limits {
            limits = limits.with_position(
                required(joint, "min_position", self.min_position)?,
                required(joint, "max_position", self.max_position)?,
            );
        }
        if self.has_velocity_limits {
            limits.has_velocity_limits = true;
            limits.max_velocity = required(joint, "max_velocity", self.max_velocity)?;
        }
        if self.has_effort_limits {
            limits = limits.with_effort(required(joint, "max_effort", self.max_effort)?);
        }

        Ok(limits)
    }
}

/// Documento de configuração de limites
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Entradas por nome de junta
    #[serde(default)]
    pub joints: BTreeMap<String, JointLimitsEntry>,
}

impl LimitsConfig {
    /// Lê configuração de uma string JSON
    pub fn from_json(json: &str) -> LimitsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(joints = config.joints.len(), "limits configuration parsed");
        Ok(config)
    }

    /// Lê configuração de um arquivo JSON
    pub fn from_path(path: impl AsRef<Path>) -> LimitsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "limits configuration loaded");
        Self::from_json(&json)
    }

    /// Serializa em JSON legível
    pub fn to_json(&self) -> LimitsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Nomes das juntas configuradas
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(String::as_str)
    }

    fn entry(&self, joint: &str) -> LimitsResult<&JointLimitsEntry> {
        self.joints
            .get(joint)
            .ok_or_else(|| LimitsError::HandleNotFound(joint.to_string()))
    }

    /// Limites rígidos de uma junta
    pub fn joint_limits(&self, joint: &str) -> LimitsResult<JointLimits> {
        self.entry(joint)?.to_limits(joint)
    }

    /// Limites suaves de uma junta, se configurados
    pub fn soft_joint_limits(&self, joint: &str) -> LimitsResult<Option<SoftJointLimits>> {
        Ok(self.entry(joint)?.soft_limits.map(SoftJointLimits::from))
    }

    fn required_soft_limits(&self, joint: &str) -> LimitsResult<SoftJointLimits> {
        self.soft_joint_limits(joint)?
            .ok_or_else(|| LimitsError::missing(joint, "soft"))
    }

    /// Cria handle de limites suaves em posição para a junta do acessor
    pub fn position_handle<A: JointAccessor>(
        &self,
        accessor: A,
    ) -> LimitsResult<PositionJointSoftLimitsHandle<A>> {
        let limits = self.joint_limits(accessor.name())?;
        let soft = self.required_soft_limits(accessor.name())?;
        PositionJointSoftLimitsHandle::new(accessor, limits, soft)
    }

    /// Cria handle de limites suaves em esforço para a junta do acessor
    pub fn effort_handle<A: JointAccessor>(
        &self,
        accessor: A,
    ) -> LimitsResult<EffortJointSoftLimitsHandle<A>> {
        let limits = self.joint_limits(accessor.name())?;
        let soft = self.required_soft_limits(accessor.name())?;
        EffortJointSoftLimitsHandle::new(accessor, limits, soft)
    }

    /// Cria handle de saturação de velocidade para a junta do acessor
    pub fn velocity_handle<A: JointAccessor>(
        &self,
        accessor: A,
    ) -> LimitsResult<VelocityJointSaturationHandle<A>> {
        let limits = self.joint_limits(accessor.name())?;
        VelocityJointSaturationHandle::new(accessor, limits)
    }

    /// Cria handle de saturação de esforço para a junta do acessor
    pub fn effort_saturation_handle<A: JointAccessor>(
        &self,
        accessor: A,
    ) -> LimitsResult<EffortJointSaturationHandle<A>> {
        let limits = self.joint_limits(accessor.name())?;
        EffortJointSaturationHandle::new(accessor, limits)
    }
}
