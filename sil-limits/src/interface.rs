//! Registro de handles de limites por nome de junta

use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};
use crate::effort::{EffortJointSaturationHandle, EffortJointSoftLimitsHandle};
use crate::error::{LimitsError, LimitsResult};
use crate::handle::AnyLimitsHandle;
use crate::position::PositionJointSoftLimitsHandle;
use crate::traits::EnforceLimits;
use crate::velocity::VelocityJointSaturationHandle;

/// Registro homogêneo de handles de limites.
///
/// Montado uma vez na inicialização e somente lido durante a fase de tempo
/// real. A iteração segue a ordem lexical dos nomes, estável entre ciclos.
#[derive(Debug, Clone)]
pub struct JointLimitsInterface<H> {
    /// Handles por nome de junta
    handles: BTreeMap<String, H>,
}

impl<H> Default for JointLimitsInterface<H> {
    fn default() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }
}

impl<H: EnforceLimits> JointLimitsInterface<H> {
    /// Cria registro vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra handle sob o nome da sua junta
    pub fn insert(&mut self, handle: H) -> LimitsResult<()> {
        let name = handle.name().to_string();
        self.insert_named(name, handle)
    }

    /// Registra handle sob um nome explícito.
    ///
    /// Nome repetido é rejeitado e a entrada existente é mantida.
    pub fn insert_named(&mut self, name: impl Into<String>, handle: H) -> LimitsResult<()> {
        let name = name.into();
        if self.handles.contains_key(&name) {
            warn!(joint = %name, "duplicate limits handle rejected");
            return Err(LimitsError::DuplicateHandle(name));
        }

        debug!(joint = %name, count = self.handles.len() + 1, "limits handle registered");
        self.handles.insert(name, handle);
        Ok(())
    }

    /// Obtém handle por nome
    pub fn get(&self, name: &str) -> LimitsResult<&H> {
        self.handles
            .get(name)
            .ok_or_else(|| LimitsError::HandleNotFound(name.to_string()))
    }

    /// Obtém handle mutável por nome
    pub fn get_mut(&mut self, name: &str) -> LimitsResult<&mut H> {
        self.handles
            .get_mut(name)
            .ok_or_else(|| LimitsError::HandleNotFound(name.to_string()))
    }

    /// Verifica se nome está registrado
    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Nomes registrados, em ordem de aplicação
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handles.keys().map(String::as_str)
    }

    /// Número de handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Registro vazio?
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Aplica limites de todos os handles, uma vez cada.
    ///
    /// Seguro para tempo real: não aloca, não bloqueia, não registra logs.
    pub fn enforce_limits(&mut self, period: Duration) {
        for handle in self.handles.values_mut() {
            handle.enforce_limits(period);
        }
    }
}

/// Juntas controladas em posição com limites suaves
pub type PositionJointSoftLimitsInterface<A> = JointLimitsInterface<PositionJointSoftLimitsHandle<A>>;

/// Juntas controladas em esforço com limites suaves
pub type EffortJointSoftLimitsInterface<A> = JointLimitsInterface<EffortJointSoftLimitsHandle<A>>;

/// Juntas controladas em velocidade, por saturação
pub type VelocityJointSaturationInterface<A> = JointLimitsInterface<VelocityJointSaturationHandle<A>>;

/// Juntas controladas em esforço, por saturação
pub type EffortJointSaturationInterface<A> = JointLimitsInterface<EffortJointSaturationHandle<A>>;

/// Juntas com modos de controle mistos
pub type MixedJointLimitsInterface<A> = JointLimitsInterface<AnyLimitsHandle<A>>;
