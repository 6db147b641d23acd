pub mod schedule;
pub mod template_message;
pub mod token_response;
