use crate::errors::Result;
use crate::rentals::checkout_model::NewCheckout;
use crate::rentals::rental_agreement::RentalAgreement;
use crate::tools::ToolCatalog;

/// Trait for rental service operations
pub trait RentalServiceTrait: Send + Sync {
    fn catalog(&self) -> &ToolCatalog;
    fn checkout(&self, new_checkout: NewCheckout) -> Result<RentalAgreement>;
}
