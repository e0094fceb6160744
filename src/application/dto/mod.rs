/// Data Transfer Objects for the application layer
///
/// DTOs carry request/response data between adapters and use cases,
/// keeping the domain layer isolated.
mod generation_request;
mod generation_response;
mod resolved_request;
mod validation;

pub use generation_request::{GenerationRequest, GenerationRequestBuilder};
pub use generation_response::GenerationResponse;
pub use resolved_request::ResolvedGenerationRequest;
pub use validation::{ValidationOutcome, ValidationRequest};
