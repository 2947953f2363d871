use std::sync::Arc;

use log::{debug, warn};

use crate::errors::Result;
use crate::tools::{CatalogError, ToolCatalog};

use super::checkout_model::{Checkout, NewCheckout};
use super::rental_agreement::RentalAgreement;
use super::rentals_traits::RentalServiceTrait;

/// Turns checkout requests into rental agreements for tools in a catalog.
pub struct RentalService {
    catalog: Arc<ToolCatalog>,
}

impl RentalService {
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        RentalService { catalog }
    }
}

impl RentalServiceTrait for RentalService {
    fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    fn checkout(&self, new_checkout: NewCheckout) -> Result<RentalAgreement> {
        let tool = match new_checkout.tool_code.as_deref() {
            Some(code) => Some(
                self.catalog
                    .get(code)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownToolCode(code.to_string()))?,
            ),
            None => None,
        };

        let checkout = Checkout::from_parts(
            tool,
            new_checkout.rental_days,
            new_checkout.discount_percent,
            new_checkout.checkout_date,
        )
        .map_err(|e| {
            warn!(
                "Rejected checkout of {:?}: {}",
                new_checkout.tool_code, e
            );
            e
        })?;

        debug!(
            "Checked out {} for {} days from {}",
            checkout.tool().code(),
            checkout.rental_days(),
            checkout.checkout_date()
        );
        Ok(RentalAgreement::new(checkout))
    }
}
