use ethwallet_core::{error::Result, utils::parse_address, Address, BlockRef};
use serde::{Deserialize, Serialize};

/// Pedido de varredura para um endereço num intervalo inclusivo de blocos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub address: Address,
    pub start_block: BlockRef,
    pub end_block: BlockRef,
}

impl ScanRequest {
    pub fn new(address: Address, start_block: impl Into<BlockRef>, end_block: impl Into<BlockRef>) -> Self {
        Self {
            address,
            start_block: start_block.into(),
            end_block: end_block.into(),
        }
    }

    /// Cria o pedido a partir de um endereço hexadecimal em qualquer caixa
    pub fn parse(address: &str, start_block: impl Into<BlockRef>, end_block: impl Into<BlockRef>) -> Result<Self> {
        Ok(Self::new(parse_address(address)?, start_block, end_block))
    }

    /// Algum dos limites depende da cabeça da cadeia
    pub fn needs_chain_head(&self) -> bool {
        self.start_block == BlockRef::Latest || self.end_block == BlockRef::Latest
    }

    /// Limites concretos dado o valor da cabeça da cadeia consultado no início.
    /// `None` se algum limite for `Latest` e a cabeça não tiver sido informada.
    pub fn resolve(&self, chain_head: Option<u64>) -> Option<(u64, u64)> {
        let bound = |b: BlockRef| match b {
            BlockRef::Height(h) => Some(h),
            BlockRef::Latest => chain_head,
        };
        Some((bound(self.start_block)?, bound(self.end_block)?))
    }
}
