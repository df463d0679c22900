use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use rand::Rng;
use time::OffsetDateTime;
use tokio::time::sleep;

use crate::domain::gateway::{PaymentError, PaymentGateway};
use crate::domain::payment::{
	CompletionDetails, PaymentCompletion, PaymentRequest, PaymentStatus,
	RequestDetails,
};

/// Simulated latency for payment requests, in milliseconds.
const REQUEST_LATENCY_MS: u64 = 2000;
/// Simulated latency for payment completions, in milliseconds.
const COMPLETION_LATENCY_MS: u64 = 3000;
/// References carry this many random base-36 characters after the prefix.
const REFERENCE_SUFFIX_LEN: usize = 9;

const REQUEST_REFERENCE_PREFIX: &str = "REQ";
const PAYMENT_REFERENCE_PREFIX: &str = "PAY";

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Stand-in for the real payment processor. Every operation sleeps its
/// configured latency and resolves with a freshly built value object; no
/// state is kept across calls.
///
/// A gateway built with [`SimulatedPaymentGateway::new`] never fails.
/// Validation and failure injection exist for exercising caller error
/// handling and are off by default.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentGateway {
	request_latency:    Duration,
	completion_latency: Duration,
	validate_input:     bool,
	inject_failures:    bool,
}

impl SimulatedPaymentGateway {
	pub fn new() -> Self {
		Self::with_latencies(
			Duration::from_millis(REQUEST_LATENCY_MS),
			Duration::from_millis(COMPLETION_LATENCY_MS),
		)
	}

	pub fn with_latencies(
		request_latency: Duration,
		completion_latency: Duration,
	) -> Self {
		Self {
			request_latency,
			completion_latency,
			validate_input: false,
			inject_failures: false,
		}
	}

	/// Rejects operations with absent required fields instead of passing
	/// them through.
	pub fn validating(mut self) -> Self {
		self.validate_input = true;
		self
	}

	/// Fails every operation with [`PaymentError::SimulatedFailure`] after
	/// its simulated latency has elapsed.
	pub fn failing(mut self) -> Self {
		self.inject_failures = true;
		self
	}
}

impl Default for SimulatedPaymentGateway {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
	async fn request_payment(
		&self,
		details: RequestDetails,
	) -> Result<PaymentRequest, PaymentError> {
		if self.validate_input {
			validate_request(&details)?;
		}

		sleep(self.request_latency).await;

		if self.inject_failures {
			warn!("Injected failure for payment request.");
			return Err(PaymentError::SimulatedFailure);
		}

		let now = OffsetDateTime::now_utc();
		let request = PaymentRequest {
			request_id:     generate_reference(REQUEST_REFERENCE_PREFIX),
			case_id:        details.case_id,
			amount:         details.amount,
			payment_method: details.payment_method,
			status:         PaymentStatus::Requested,
			created_at:     now,
			updated_at:     now,
		};

		info!("Simulated payment request {} issued.", request.request_id);

		Ok(request)
	}

	async fn complete_payment(
		&self,
		details: CompletionDetails,
	) -> Result<PaymentCompletion, PaymentError> {
		if self.validate_input {
			validate_completion(&details)?;
		}

		sleep(self.completion_latency).await;

		if self.inject_failures {
			warn!("Injected failure for payment completion.");
			return Err(PaymentError::SimulatedFailure);
		}

		let now = OffsetDateTime::now_utc();
		let completion = PaymentCompletion {
			payment_id:       generate_reference(PAYMENT_REFERENCE_PREFIX),
			case_id:          details.case_id,
			amount:           details.amount,
			method:           details.method,
			reference_number: details.reference_number,
			status:           PaymentStatus::Completed,
			completed_at:     now,
			updated_at:       now,
		};

		info!("Simulated payment {} completed.", completion.payment_id);

		Ok(completion)
	}
}

/// Builds `<prefix>-` followed by [`REFERENCE_SUFFIX_LEN`] random base-36
/// characters. Not collision-checked against earlier calls.
fn generate_reference(prefix: &str) -> String {
	let mut rng = rand::thread_rng();
	let suffix: String = (0..REFERENCE_SUFFIX_LEN)
		.map(|_| {
			let index = rng.gen_range(0..BASE36_ALPHABET.len());
			BASE36_ALPHABET[index] as char
		})
		.collect();

	format!("{prefix}-{suffix}")
}

fn validate_request(details: &RequestDetails) -> Result<(), PaymentError> {
	require("caseId", details.case_id.is_some())?;
	require("amount", details.amount.is_some())?;
	require("paymentMethod", details.payment_method.is_some())
}

fn validate_completion(
	details: &CompletionDetails,
) -> Result<(), PaymentError> {
	require("caseId", details.case_id.is_some())?;
	require("amount", details.amount.is_some())?;
	require("method", details.method.is_some())?;
	require("referenceNumber", details.reference_number.is_some())
}

fn require(field: &'static str, present: bool) -> Result<(), PaymentError> {
	if present {
		Ok(())
	} else {
		Err(PaymentError::InvalidInput { field })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_reference_shape() {
		let reference = generate_reference(REQUEST_REFERENCE_PREFIX);

		assert!(reference.starts_with("REQ-"));

		let suffix = &reference["REQ-".len()..];
		assert_eq!(suffix.len(), REFERENCE_SUFFIX_LEN);
		assert!(
			suffix
				.bytes()
				.all(|byte| BASE36_ALPHABET.contains(&byte))
		);
	}

	#[test]
	fn test_validate_request_reports_missing_field() {
		let details = RequestDetails {
			case_id:        None,
			amount:         Some(10.0),
			payment_method: Some("card".to_string()),
		};

		let result = validate_request(&details);

		assert!(matches!(
			result,
			Err(PaymentError::InvalidInput { field: "caseId" })
		));
	}

	#[test]
	fn test_validate_completion_accepts_full_details() {
		let details = CompletionDetails {
			case_id:          Some("CASE-1".to_string()),
			amount:           Some(250.0),
			method:           Some("upi".to_string()),
			reference_number: Some("REF-1".to_string()),
		};

		assert!(validate_completion(&details).is_ok());
	}
}
