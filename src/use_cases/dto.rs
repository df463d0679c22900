use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RequestPaymentCommand {
	pub case_id:        Option<String>,
	pub amount:         Option<f64>,
	pub payment_method: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompletePaymentCommand {
	pub case_id:          Option<String>,
	pub amount:           Option<f64>,
	pub method:           Option<String>,
	pub reference_number: Option<String>,
}
