pub mod reset;
pub mod reset_finish;
pub mod reset_start;

pub use reset::{TwoFaResetComposedRequest, TwoFaResetRequest, TwoFaResetResponse};
pub use reset_finish::{TwoFaResetFinishRequest, TwoFaResetFinishResponse};
pub use reset_start::{TwoFaResetStartRequest, TwoFaResetStartResponse};
