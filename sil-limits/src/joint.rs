//! Estado compartilhado de junta (acessor sem locks)

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::traits::JointAccessor;

/// `f64` atômico guardado como padrão de bits
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed)
    }
}

/// Estado de uma junta: leituras do hardware e comando pendente.
///
/// Pertence à camada de hardware/simulação. A camada de controle escreve o
/// comando, os handles de limites o saturam, o hardware o consome. Todos os
/// campos são atômicos, então o estado pode ser compartilhado entre threads
/// sem `Mutex`.
pub struct JointState {
    name: String,
    position: AtomicF64,
    velocity: AtomicF64,
    effort: AtomicF64,
    command: AtomicF64,
}

impl JointState {
    /// Cria junta parada na origem
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: AtomicF64::new(0.0),
            velocity: AtomicF64::new(0.0),
            effort: AtomicF64::new(0.0),
            command: AtomicF64::new(0.0),
        }
    }

    /// Cria junta com posição e velocidade iniciais
    pub fn with_state(name: &str, position: f64, velocity: f64) -> Self {
        let joint = Self::new(name);
        joint.set_position(position);
        joint.set_velocity(velocity);
        joint
    }

    /// Atualiza posição medida
    pub fn set_position(&self, position: f64) {
        self.position.store(position);
    }

    /// Atualiza velocidade medida
    pub fn set_velocity(&self, velocity: f64) {
        self.velocity.store(velocity);
    }

    /// Esforço medido
    pub fn effort(&self) -> f64 {
        self.effort.load()
    }

    /// Atualiza esforço medido
    pub fn set_effort(&self, effort: f64) {
        self.effort.store(effort);
    }
}

impl JointAccessor for JointState {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> f64 {
        self.position.load()
    }

    fn velocity(&self) -> f64 {
        self.velocity.load()
    }

    fn command(&self) -> f64 {
        self.command.load()
    }

    fn set_command(&self, value: f64) {
        self.command.store(value);
    }
}

impl fmt::Debug for JointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JointState")
            .field("name", &self.name)
            .field("position", &self.position.load())
            .field("velocity", &self.velocity.load())
            .field("effort", &self.effort.load())
            .field("command", &self.command.load())
            .finish()
    }
}
