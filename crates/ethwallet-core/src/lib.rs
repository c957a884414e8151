/*!
 * ethwallet Core
 *
 * Tipos, erros e utilitários compartilhados para a workspace ethwallet
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::{Error, Result};
pub use traits::BlockDataProvider;
pub use types::*;
pub use ethereum_types::{Address, H256, U256};
