//! Erros da camada de limites

use thiserror::Error;

pub type LimitsResult<T> = Result<T, LimitsError>;

/// Erros de limites de junta
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// Família de limites obrigatória ausente
    #[error("Cannot enforce limits for joint '{joint}'. It has no {kind} limits specification.")]
    MissingLimits {
        joint: String,
        kind: &'static str,
    },

    /// Limites presentes mas inutilizáveis
    #[error("Invalid limits for joint '{joint}': {reason}")]
    InvalidLimits {
        joint: String,
        reason: String,
    },

    /// Handle não registrado
    #[error("Could not find resource '{0}'")]
    HandleNotFound(String),

    /// Nome já registrado
    #[error("Resource '{0}' is already registered")]
    DuplicateHandle(String),

    /// Configuração malformada
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Falha de leitura
    #[error("I/O error: {0}")]
    Io(String),
}

impl LimitsError {
    /// Cria erro de limites ausentes
    pub fn missing(joint: &str, kind: &'static str) -> Self {
        LimitsError::MissingLimits {
            joint: joint.to_string(),
            kind,
        }
    }

    /// Cria erro de limites inválidos
    pub fn invalid(joint: &str, reason: impl Into<String>) -> Self {
        LimitsError::InvalidLimits {
            joint: joint.to_string(),
            reason: reason.into(),
        }
    }

    /// Erro de construção (limites ausentes ou inválidos)?
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LimitsError::MissingLimits { .. } | LimitsError::InvalidLimits { .. }
        )
    }

    /// Nome da junta envolvida, se houver
    pub fn joint(&self) -> Option<&str> {
        match self {
            LimitsError::MissingLimits { joint, .. } | LimitsError::InvalidLimits { joint, .. } => {
                Some(joint)
            }
            LimitsError::HandleNotFound(name) | LimitsError::DuplicateHandle(name) => Some(name),
            LimitsError::Config(_) | LimitsError::Io(_) => None,
        }
    }
}

impl From<serde_json::Error> for LimitsError {
    fn from(err: serde_json::Error) -> Self {
        LimitsError::Config(err.to_string())
    }
}

impl From<std::io::Error> for LimitsError {
    fn from(err: std::io::Error) -> Self {
        LimitsError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_limits_message() {
        let err = LimitsError::missing("elbow", "velocity");
        assert_eq!(
            err.to_string(),
            "Cannot enforce limits for joint 'elbow'. It has no velocity limits specification."
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_limits_message() {
        let err = LimitsError::invalid("wrist", "max_velocity must be non-negative");
        assert!(err.to_string().contains("wrist"));
        assert!(err.to_string().contains("non-negative"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_lookup_error_is_not_configuration() {
        let err = LimitsError::HandleNotFound("ghost".into());
        assert!(!err.is_configuration());
        assert_eq!(err.joint(), Some("ghost"));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LimitsError = json_err.into();
        assert!(matches!(err, LimitsError::Config(_)));
        assert_eq!(err.joint(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: LimitsError = io_err.into();
        assert!(err.to_string().contains("missing.json"));
    }
}
