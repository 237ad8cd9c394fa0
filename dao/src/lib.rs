use std::fmt::Debug;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub mod cut_off;
pub mod employee;
pub mod overtime;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid uuid in database: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Invalid timestamp in database: {0}")]
    DateTimeParseError(#[from] time::error::Parse),

    #[error("Invalid date in database: {0}")]
    DateError(#[from] lembur_utils::LemburDateError),
}

pub trait Transaction: Clone + Debug + Send + Sync + 'static {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockTransaction;
impl Transaction for MockTransaction {}

#[automock(type Transaction = MockTransaction;)]
#[async_trait]
pub trait TransactionDao {
    type Transaction: Transaction;

    async fn new_transaction(&self) -> Result<Self::Transaction, DaoError>;

    /// Returns the given transaction or starts a new one.
    async fn use_transaction(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Self::Transaction, DaoError>;

    /// Commits the transaction if the caller holds the last reference to it.
    async fn commit(&self, tx: Self::Transaction) -> Result<(), DaoError>;
}
