pub mod codec;
pub mod validation;

pub use codec::{decode_request, decode_response, encode_request, encode_response, DtoResponse};
