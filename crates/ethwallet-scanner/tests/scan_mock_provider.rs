use async_trait::async_trait;
use ethwallet_core::{
    error::Result, Address, BlockDataProvider, BlockRef, BlockWithTransactions, Error, ScannedTransaction, H256, U256,
};
use ethwallet_scanner::{ScanRequest, TransactionScanner};
use mockall::{mock, predicate::eq, Sequence};

mock! {
    pub Provider {}

    #[async_trait]
    impl BlockDataProvider for Provider {
        async fn get_chain_head(&self) -> Result<u64>;
        async fn get_block_with_transactions(&self, height: u64) -> Result<Option<BlockWithTransactions>>;
    }
}

fn transfer(height: u64, from: Address, to: Address) -> ScannedTransaction {
    ScannedTransaction {
        hash: H256::from_low_u64_be(height),
        block_number: Some(height),
        transaction_index: Some(0),
        from: Some(from),
        to: Some(to),
        value: U256::exp10(15),
        nonce: U256::zero(),
        input_len: 0,
    }
}

#[tokio::test]
async fn one_fetch_per_height_in_ascending_order() {
    let me = Address::repeat_byte(0x42);
    let mut provider = MockProvider::new();
    let mut seq = Sequence::new();

    provider.expect_get_chain_head().times(1).in_sequence(&mut seq).returning(|| Ok(12));
    for height in 10..=12u64 {
        provider
            .expect_get_block_with_transactions()
            .with(eq(height))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |h| Ok(Some(BlockWithTransactions::new(h, vec![transfer(h, me, Address::zero())]))));
    }

    let result = TransactionScanner::new(provider)
        .scan(&ScanRequest::new(me, 10u64, BlockRef::Latest))
        .await
        .unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.blocks_fetched, 3);
}

#[tokio::test]
async fn fixed_range_never_asks_for_head() {
    let mut provider = MockProvider::new();
    provider.expect_get_chain_head().never();
    provider
        .expect_get_block_with_transactions()
        .times(2)
        .returning(|_| Ok(None));

    let result = TransactionScanner::new(provider)
        .scan(&ScanRequest::new(Address::repeat_byte(1), 7u64, 8u64))
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn failure_discards_earlier_matches() {
    let me = Address::repeat_byte(0x42);
    let mut provider = MockProvider::new();
    provider
        .expect_get_block_with_transactions()
        .with(eq(1u64))
        .returning(move |h| Ok(Some(BlockWithTransactions::new(h, vec![transfer(h, Address::zero(), me)]))));
    provider
        .expect_get_block_with_transactions()
        .with(eq(2u64))
        .returning(|_| Err(Error::RpcError("502 bad gateway".into())));
    provider.expect_get_block_with_transactions().with(eq(3u64)).never();

    let res = TransactionScanner::new(provider)
        .scan(&ScanRequest::new(me, 1u64, 3u64))
        .await;

    match res {
        Err(err) => assert_eq!(err.fetch_target(), Some(ethwallet_core::FetchTarget::Block(2))),
        Ok(r) => panic!("esperava falha, obteve {} transações", r.len()),
    }
}
