use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
	Requested,
	Completed,
}

impl PaymentStatus {
	pub fn is_completed(&self) -> bool {
		matches!(self, PaymentStatus::Completed)
	}
}

/// Caller-provided details for a payment request. No field is validated;
/// absent fields stay absent in the produced [`PaymentRequest`].
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RequestDetails {
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub case_id:        Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub amount:         Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub payment_method: Option<String>,
}

/// Caller-provided details for a payment completion.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompletionDetails {
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub case_id:          Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub amount:           Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub method:           Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub reference_number: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	#[serde(rename = "requestId")]
	pub request_id:     String,
	#[serde(
		rename = "caseId",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub case_id:        Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub amount:         Option<f64>,
	#[serde(
		rename = "paymentMethod",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub payment_method: Option<String>,
	pub status:         PaymentStatus,
	#[serde(rename = "createdAt", with = "time::serde::rfc3339")]
	pub created_at:     OffsetDateTime,
	#[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
	pub updated_at:     OffsetDateTime,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentCompletion {
	#[serde(rename = "paymentId")]
	pub payment_id:       String,
	#[serde(
		rename = "caseId",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub case_id:          Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub amount:           Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub method:           Option<String>,
	#[serde(
		rename = "referenceNumber",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub reference_number: Option<String>,
	pub status:           PaymentStatus,
	#[serde(rename = "completedAt", with = "time::serde::rfc3339")]
	pub completed_at:     OffsetDateTime,
	#[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
	pub updated_at:       OffsetDateTime,
}
