//! # Traits — Acesso à junta e aplicação de limites
//!
//! | Trait | Papel |
//! |:------|:------|
//! | [`JointAccessor`] | Lê estado da junta e escreve o comando pendente |
//! | [`EnforceLimits`] | Satura o comando pendente uma vez por ciclo |
//!
//! O acessor pertence à camada de hardware/simulação. Os handles só guardam
//! uma referência (ou ponteiro compartilhado) e nunca controlam seu tempo de vida.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// ACESSOR
// ═══════════════════════════════════════════════════════════════════════════════

/// Acesso ao estado e ao comando de uma junta.
///
/// `set_command` recebe `&self`: implementações usam mutabilidade interior
/// sem locks (atômicos ou `Cell`). Um único escritor por ciclo.
///
/// # Exemplo
///
/// ```
/// use std::cell::Cell;
/// use sil_limits::JointAccessor;
///
/// struct SimJoint {
///     pos: f64,
///     cmd: Cell<f64>,
/// }
///
/// impl JointAccessor for SimJoint {
///     fn name(&self) -> &str { "sim" }
///     fn position(&self) -> f64 { self.pos }
///     fn velocity(&self) -> f64 { 0.0 }
///     fn command(&self) -> f64 { self.cmd.get() }
///     fn set_command(&self, value: f64) { self.cmd.set(value) }
/// }
/// ```
pub trait JointAccessor {
    /// Nome da junta
    fn name(&self) -> &str;

    /// Posição medida
    fn position(&self) -> f64;

    /// Velocidade medida
    fn velocity(&self) -> f64;

    /// Último comando escrito pelo controlador
    fn command(&self) -> f64;

    /// Sobrescreve o comando pendente
    fn set_command(&self, value: f64);
}

impl<T: JointAccessor + ?Sized> JointAccessor for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn velocity(&self) -> f64 {
        (**self).velocity()
    }

    fn command(&self) -> f64 {
        (**self).command()
    }

    fn set_command(&self, value: f64) {
        (**self).set_command(value)
    }
}

impl<T: JointAccessor + ?Sized> JointAccessor for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn velocity(&self) -> f64 {
        (**self).velocity()
    }

    fn command(&self) -> f64 {
        (**self).command()
    }

    fn set_command(&self, value: f64) {
        (**self).set_command(value)
    }
}

impl<T: JointAccessor + ?Sized> JointAccessor for Rc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn velocity(&self) -> f64 {
        (**self).velocity()
    }

    fn command(&self) -> f64 {
        (**self).command()
    }

    fn set_command(&self, value: f64) {
        (**self).set_command(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// APLICAÇÃO DE LIMITES
// ═══════════════════════════════════════════════════════════════════════════════

/// Handle que aplica limites ao comando de uma junta.
///
/// `enforce_limits` roda no laço de tempo real: sem alocação, sem bloqueio,
/// custo constante. Nunca retorna erro.
pub trait EnforceLimits {
    /// Nome da junta controlada
    fn name(&self) -> &str;

    /// Satura o comando pendente para o ciclo de duração `period`
    fn enforce_limits(&mut self, period: Duration);
}
