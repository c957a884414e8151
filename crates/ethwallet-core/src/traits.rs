/*!
 * ethwallet Traits
 *
 * Traits comuns usados em toda a workspace ethwallet
 */

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::types::BlockWithTransactions;

/// Fonte de dados de blocos consumida pela varredura de transações
#[async_trait]
pub trait BlockDataProvider: Send + Sync {
    /// Obtém a altura da cabeça da cadeia
    async fn get_chain_head(&self) -> Result<u64>;

    /// Obtém o bloco `height` com os corpos das transações.
    ///
    /// Retorna `Ok(None)` quando o bloco ainda não existe ou foi podado.
    async fn get_block_with_transactions(&self, height: u64) -> Result<Option<BlockWithTransactions>>;
}

#[async_trait]
impl<P: BlockDataProvider + ?Sized> BlockDataProvider for Arc<P> {
    async fn get_chain_head(&self) -> Result<u64> {
        (**self).get_chain_head().await
    }

    async fn get_block_with_transactions(&self, height: u64) -> Result<Option<BlockWithTransactions>> {
        (**self).get_block_with_transactions(height).await
    }
}

#[async_trait]
impl<P: BlockDataProvider + ?Sized> BlockDataProvider for &P {
    async fn get_chain_head(&self) -> Result<u64> {
        (**self).get_chain_head().await
    }

    async fn get_block_with_transactions(&self, height: u64) -> Result<Option<BlockWithTransactions>> {
        (**self).get_block_with_transactions(height).await
    }
}
