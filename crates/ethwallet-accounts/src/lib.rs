/*!
 * ethwallet Accounts
 *
 * Criação de carteiras, saldo e transferência simples de ether
 */

pub mod balance;
pub mod transfer;
pub mod wallet;

pub use balance::{fetch_account_balance, fetch_balance_wei};
pub use transfer::{send_transaction, wait_for_confirmation, SentTransaction, TransferReceipt};
pub use wallet::{create_wallet, wallet_from_private_key, WalletData};
