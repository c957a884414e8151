use thiserror::Error;

use crate::types::FetchTarget;

/// Erros comuns da workspace ethwallet
#[derive(Error, Debug)]
pub enum Error {
    /// Erro de comunicação com o node Ethereum
    #[error("Erro de RPC: {0}")]
    RpcError(String),

    /// Falha do provedor de blocos ao buscar um alvo específico da varredura
    #[error("Falha do provedor ao buscar {target}: {source}")]
    ProviderError {
        target: FetchTarget,
        #[source]
        source: Box<Error>,
    },

    /// Erro de decodificação de dados
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    /// Erro de validação
    #[error("Erro de validação: {0}")]
    ValidationError(String),

    /// Erro de chave ou assinatura
    #[error("Erro de carteira: {0}")]
    WalletError(String),

    /// Recurso não encontrado
    #[error("Não encontrado: {0}")]
    NotFound(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Envolve `cause` como falha do provedor ao buscar `target`
    pub fn provider(target: FetchTarget, cause: Error) -> Self {
        Error::ProviderError {
            target,
            source: Box::new(cause),
        }
    }

    /// Alvo da busca que falhou, se o erro veio do provedor de blocos
    pub fn fetch_target(&self) -> Option<FetchTarget> {
        match self {
            Error::ProviderError { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// Tipo de resultado usado em toda a workspace
pub type Result<T> = std::result::Result<T, Error>;
