/*!
 * ethwallet Types
 *
 * Tipos comuns usados em toda a workspace ethwallet
 */

use chrono::{DateTime, TimeZone, Utc};
use ethereum_types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Alias para hash de transação
pub type TransactionHash = H256;

/// Referência a um bloco: altura fixa ou a cabeça da cadeia no início da varredura
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockRef {
    Height(u64),
    #[default]
    Latest,
}

impl BlockRef {
    /// Altura concreta, se a referência já estiver resolvida
    pub fn height(&self) -> Option<u64> {
        match self {
            BlockRef::Height(h) => Some(*h),
            BlockRef::Latest => None,
        }
    }

    /// Resolve a referência usando a cabeça da cadeia já consultada
    pub fn resolve(&self, chain_head: u64) -> u64 {
        match self {
            BlockRef::Height(h) => *h,
            BlockRef::Latest => chain_head,
        }
    }
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockRef::Height(h) => write!(f, "{}", h),
            BlockRef::Latest => write!(f, "latest"),
        }
    }
}

impl FromStr for BlockRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(BlockRef::Latest);
        }
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse::<u64>(),
        };
        parsed
            .map(BlockRef::Height)
            .map_err(|_| Error::ValidationError(format!("referência de bloco inválida: {:?}", s)))
    }
}

/// O que o provedor estava buscando quando falhou
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchTarget {
    ChainHead,
    Block(u64),
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::ChainHead => write!(f, "cabeça da cadeia"),
            FetchTarget::Block(h) => write!(f, "bloco {}", h),
        }
    }
}

/// Transação de um bloco, reduzida aos campos usados pela carteira
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedTransaction {
    pub hash: TransactionHash,
    pub block_number: Option<u64>,
    pub transaction_index: Option<u64>,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: U256,
    pub nonce: U256,
    pub input_len: usize,
}

impl ScannedTransaction {
    /// Verifica se `address` aparece como remetente ou destinatário
    pub fn touches(&self, address: &Address) -> bool {
        self.from.as_ref() == Some(address) || self.to.as_ref() == Some(address)
    }

    /// Transação de contrato (sem destinatário)
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

impl From<&ethers::types::Transaction> for ScannedTransaction {
    fn from(tx: &ethers::types::Transaction) -> Self {
        Self {
            hash: tx.hash,
            block_number: tx.block_number.map(|n| n.as_u64()),
            transaction_index: tx.transaction_index.map(|i| i.as_u64()),
            from: Some(tx.from),
            to: tx.to,
            value: tx.value,
            nonce: tx.nonce,
            input_len: tx.input.len(),
        }
    }
}

/// Bloco com os corpos das transações, na ordem nativa do bloco
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockWithTransactions {
    pub number: u64,
    pub hash: Option<H256>,
    pub timestamp: Option<DateTime<Utc>>,
    pub transactions: Vec<ScannedTransaction>,
}

impl BlockWithTransactions {
    /// Cria um bloco sem hash nem timestamp
    pub fn new(number: u64, transactions: Vec<ScannedTransaction>) -> Self {
        Self {
            number,
            hash: None,
            timestamp: None,
            transactions,
        }
    }

    /// Converte um bloco do `ethers`; `fallback_number` cobre blocos pendentes sem número
    pub fn from_ethers(
        block: &ethers::types::Block<ethers::types::Transaction>,
        fallback_number: u64,
    ) -> Self {
        let timestamp = if block.timestamp > U256::from(i64::MAX as u64) {
            None
        } else {
            Utc.timestamp_opt(block.timestamp.as_u64() as i64, 0).single()
        };
        Self {
            number: block.number.map(|n| n.as_u64()).unwrap_or(fallback_number),
            hash: block.hash,
            timestamp,
            transactions: block.transactions.iter().map(ScannedTransaction::from).collect(),
        }
    }
}
