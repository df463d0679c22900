use crate::domain::gateway::{PaymentError, PaymentGateway};
use crate::domain::payment::{PaymentRequest, RequestDetails};
use crate::use_cases::dto::RequestPaymentCommand;

#[derive(Clone)]
pub struct RequestPaymentUseCase<G: PaymentGateway> {
	payment_gateway: G,
}

impl<G: PaymentGateway> RequestPaymentUseCase<G> {
	pub fn new(payment_gateway: G) -> Self {
		Self { payment_gateway }
	}

	pub async fn execute(
		&self,
		command: RequestPaymentCommand,
	) -> Result<PaymentRequest, PaymentError> {
		let details = RequestDetails {
			case_id:        command.case_id,
			amount:         command.amount,
			payment_method: command.payment_method,
		};

		self.payment_gateway.request_payment(details).await
	}
}
