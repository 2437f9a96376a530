//! Payment authorization seam.
//!
//! Booking submission charges through a [`PaymentGateway`] trait object held
//! in [`crate::state::AppState`], so the binary and tests can swap providers
//! without touching handler code. The default [`MockGateway`] approves every
//! positive amount and issues a synthetic reference.

use async_trait::async_trait;
use uuid::Uuid;

/// A successful charge authorization from the gateway.
#[derive(Debug, Clone)]
pub struct PaymentAuthorization {
    /// Provider-issued reference stored on the booking (`payment_ref`).
    pub reference: String,
}

/// Errors a payment gateway can return.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The provider rejected the charge (insufficient funds, bad card, ...).
    #[error("Payment declined: {0}")]
    Declined(String),

    /// The provider itself failed (network, misconfiguration, ...).
    #[error("Payment provider error: {0}")]
    Provider(String),
}

/// Gateway capable of authorizing a charge for a booking total.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize a charge of `amount_cents` in `currency`.
    async fn authorize(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentAuthorization, PaymentError>;
}

/// Gateway that approves every positive amount without contacting a provider.
pub struct MockGateway;

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn authorize(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentAuthorization, PaymentError> {
        if amount_cents <= 0 {
            return Err(PaymentError::Declined(
                "Charge amount must be positive".to_string(),
            ));
        }

        let reference = format!("mock-{}", Uuid::new_v4());
        tracing::info!(amount_cents, currency, reference = %reference, "Authorized mock payment");
        Ok(PaymentAuthorization { reference })
    }
}
