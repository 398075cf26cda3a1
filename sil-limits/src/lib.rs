//! # 🛡️ sil-limits — Limites Suaves de Junta
//!
//! Envelope de segurança para comandos de atuadores em malha fechada. A cada
//! ciclo de controle, satura o comando (posição, velocidade ou esforço) gerado
//! pelo controlador para que a trajetória não ultrapasse os limites físicos
//! da junta. O envelope "suave" desacelera o comando permitido à medida que a
//! junta se aproxima de um limite rígido, em vez de cortá-lo na fronteira.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │        JointLimitsInterface<H> (registro)        │
//! │            enforce_limits(period)                │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐  │
//! │  │  Position  │ │   Effort   │ │   Velocity   │  │
//! │  │ SoftLimits │ │ SoftLimits │ │  Saturation  │  │
//! │  └────────────┘ └────────────┘ └──────────────┘  │
//! │          ↓ JointLimits + SoftJointLimits         │
//! └──────────────────────────────────────────────────┘
//!                      ↓ JointAccessor
//!             Hardware / Simulação (JointState)
//! ```
//!
//! ## Componentes
//!
//! - [`JointLimits`] / [`SoftJointLimits`]: limites rígidos e parâmetros suaves
//! - [`saturate`]: primitiva de saturação
//! - [`PositionJointSoftLimitsHandle`]: posição + velocidade com limites suaves
//! - [`EffortJointSoftLimitsHandle`]: esforço com limites suaves
//! - [`VelocityJointSaturationHandle`]: saturação estática de velocidade
//! - [`EffortJointSaturationHandle`]: saturação de esforço sem limites suaves
//! - [`JointLimitsInterface`]: registro por nome, aplica todos por ciclo
//! - [`LimitsConfig`]: carregamento de limites a partir de JSON
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::time::Duration;
//! use sil_limits::{
//!     JointAccessor, JointLimits, JointState, PositionJointSoftLimitsHandle,
//!     PositionJointSoftLimitsInterface, SoftJointLimits,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let elbow = JointState::with_state("elbow", 0.95, 0.0);
//!
//! let limits = JointLimits::velocity(2.0).with_position(0.0, 1.0);
//! let soft = SoftJointLimits::new(10.0, 0.0, 0.0, 1.0);
//!
//! let mut interface = PositionJointSoftLimitsInterface::new();
//! interface.insert(PositionJointSoftLimitsHandle::new(&elbow, limits, soft)?)?;
//!
//! // Laço de controle
//! elbow.set_command(2.0);
//! interface.enforce_limits(Duration::from_millis(100));
//! assert!((elbow.command() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tempo Real
//!
//! `enforce_limits` (handles e registro) não aloca, não bloqueia, não usa
//! locks nem registra logs. Erros só existem na construção: um handle que
//! falha na validação nunca chega a existir.

pub mod error;
pub mod types;
pub mod traits;
pub mod joint;
pub mod position;
pub mod effort;
pub mod velocity;
pub mod handle;
pub mod interface;
pub mod config;

pub use error::{LimitsError, LimitsResult};
pub use types::{saturate, JointLimits, SoftJointLimits};
pub use traits::{EnforceLimits, JointAccessor};
pub use joint::JointState;
pub use position::PositionJointSoftLimitsHandle;
pub use effort::{EffortJointSaturationHandle, EffortJointSoftLimitsHandle};
pub use velocity::VelocityJointSaturationHandle;
pub use handle::AnyLimitsHandle;
pub use interface::{
    EffortJointSaturationInterface, EffortJointSoftLimitsInterface, JointLimitsInterface,
    MixedJointLimitsInterface, PositionJointSoftLimitsInterface, VelocityJointSaturationInterface,
};
pub use config::{JointLimitsEntry, LimitsConfig, SoftLimitsEntry};
