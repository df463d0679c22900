use crate::domain::gateway::{PaymentError, PaymentGateway};
use crate::domain::payment::{CompletionDetails, PaymentCompletion};
use crate::use_cases::dto::CompletePaymentCommand;

#[derive(Clone)]
pub struct CompletePaymentUseCase<G: PaymentGateway> {
	payment_gateway: G,
}

impl<G: PaymentGateway> CompletePaymentUseCase<G> {
	pub fn new(payment_gateway: G) -> Self {
		Self { payment_gateway }
	}

	pub async fn execute(
		&self,
		command: CompletePaymentCommand,
	) -> Result<PaymentCompletion, PaymentError> {
		let details = CompletionDetails {
			case_id:          command.case_id,
			amount:           command.amount,
			method:           command.method,
			reference_number: command.reference_number,
		};

		self.payment_gateway.complete_payment(details).await
	}
}
