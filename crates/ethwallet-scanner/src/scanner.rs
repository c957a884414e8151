use ethwallet_core::{
    error::Result, utils::format_address, Address, BlockDataProvider, Error, FetchTarget, ScannedTransaction,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::request::ScanRequest;

/// Resultado de uma varredura concluída
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub address: Address,
    /// Limite inferior resolvido
    pub start_block: u64,
    /// Limite superior resolvido, fixo durante toda a varredura
    pub end_block: u64,
    /// Quantidade de blocos solicitados ao provedor
    pub blocks_fetched: u64,
    /// Transações por altura crescente e, dentro do bloco, pela ordem nativa
    pub transactions: Vec<ScannedTransaction>,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn into_transactions(self) -> Vec<ScannedTransaction> {
        self.transactions
    }
}

/// Varredura linear de blocos por transações que tocam um endereço.
///
/// Cada altura do intervalo gera exatamente uma busca ao provedor, em ordem
/// crescente e uma de cada vez. Não há índice: o custo é proporcional ao
/// tamanho do intervalo.
pub struct TransactionScanner<P> {
    provider: P,
}

impl<P: BlockDataProvider> TransactionScanner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve os limites do pedido, consultando a cabeça da cadeia no máximo uma vez
    async fn resolve_bounds(&self, request: &ScanRequest) -> Result<(u64, u64)> {
        let head = if request.needs_chain_head() {
            let head = self
                .provider
                .get_chain_head()
                .await
                .map_err(|e| Error::provider(FetchTarget::ChainHead, e))?;
            debug!(head, "cabeça da cadeia resolvida");
            Some(head)
        } else {
            None
        };
        request
            .resolve(head)
            .ok_or_else(|| Error::Other("cabeça da cadeia não resolvida".to_string()))
    }

    /// Executa a varredura. Qualquer falha do provedor aborta e descarta o parcial.
    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanResult> {
        let (start_block, end_block) = self.resolve_bounds(request).await?;
        let address = request.address;

        let mut transactions = Vec::new();
        let mut blocks_fetched = 0u64;

        for height in start_block..=end_block {
            let block = self
                .provider
                .get_block_with_transactions(height)
                .await
                .map_err(|e| Error::provider(FetchTarget::Block(height), e))?;
            blocks_fetched += 1;

            let Some(block) = block else {
                warn!(height, "bloco ausente, ignorado");
                continue;
            };

            let before = transactions.len();
            transactions.extend(block.transactions.into_iter().filter(|tx| tx.touches(&address)));
            debug!(height, matched = transactions.len() - before, "bloco varrido");
        }

        info!(
            address = %format_address(&address),
            start_block,
            end_block,
            blocks_fetched,
            matches = transactions.len(),
            "varredura concluída"
        );

        Ok(ScanResult {
            address,
            start_block,
            end_block,
            blocks_fetched,
            transactions,
        })
    }
}
