use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::payment::{
	CompletionDetails, PaymentCompletion, PaymentRequest, RequestDetails,
};

#[derive(Debug, Display, Error)]
pub enum PaymentError {
	#[display("Required payment field '{field}' is missing.")]
	InvalidInput { field: &'static str },
	#[display("Payment gateway failure.")]
	SimulatedFailure,
}

/// Port to whatever issues payment requests and completions. The only
/// implementation today is the simulated gateway; a real processor client
/// slots in behind the same trait.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn request_payment(
		&self,
		details: RequestDetails,
	) -> Result<PaymentRequest, PaymentError>;
	async fn complete_payment(
		&self,
		details: CompletionDetails,
	) -> Result<PaymentCompletion, PaymentError>;
}
