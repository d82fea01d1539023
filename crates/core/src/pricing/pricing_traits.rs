use super::price_columns::PriceColumn;
use super::pricing_model::{PriceTarget, PriceUpdate};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Storage collaborator that persists one named price column.
#[async_trait]
pub trait PriceRepositoryTrait: Send + Sync {
    async fn write_price_column(
        &self,
        target: &PriceTarget,
        column: &str,
        value: Option<Decimal>,
    ) -> Result<()>;
}

/// Trait defining the contract for admin price edits.
#[async_trait]
pub trait PriceAdminServiceTrait: Send + Sync {
    /// Validates and persists one edit, returning the column written.
    async fn set_price(&self, target: &PriceTarget, update: PriceUpdate) -> Result<PriceColumn>;

    /// Applies several edits to the same record, stopping at the first failure.
    async fn set_prices(
        &self,
        target: &PriceTarget,
        updates: Vec<PriceUpdate>,
    ) -> Result<Vec<PriceColumn>>;
}
