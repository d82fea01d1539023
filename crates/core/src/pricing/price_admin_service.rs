//! Admin write surface for stored prices.

use super::price_columns::PriceColumn;
use super::pricing_model::{validate_slot, PriceTarget, PriceUpdate};
use super::pricing_traits::{PriceAdminServiceTrait, PriceRepositoryTrait};
use crate::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PriceAdminService {
    repository: Arc<dyn PriceRepositoryTrait>,
}

impl PriceAdminService {
    pub fn new(repository: Arc<dyn PriceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PriceAdminServiceTrait for PriceAdminService {
    async fn set_price(&self, target: &PriceTarget, update: PriceUpdate) -> Result<PriceColumn> {
        validate_slot(target.mode, update.variant, update.value)?;

        let column = PriceColumn::new(target.kind, update.variant, update.market);
        self.repository
            .write_price_column(target, &column.name(), update.value)
            .await?;

        log::debug!(
            "Wrote {} = {:?} for {}",
            column,
            update.value,
            target.entity_id
        );
        Ok(column)
    }

    async fn set_prices(
        &self,
        target: &PriceTarget,
        updates: Vec<PriceUpdate>,
    ) -> Result<Vec<PriceColumn>> {
        // Validate everything first so a bad edit does not leave a partial write
        for update in &updates {
            validate_slot(target.mode, update.variant, update.value)?;
        }

        let mut written = Vec::with_capacity(updates.len());
        for update in updates {
            written.push(self.set_price(target, update).await?);
        }
        Ok(written)
    }
}
