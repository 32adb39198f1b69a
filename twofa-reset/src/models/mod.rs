//! Identifier newtypes and the capability traits shared by the reset DTOs.

pub mod twofa;

pub use twofa::{OwnerScoped, ResetUid, TwoFaDto, TwoFaDtoBase, TwoFaOwnerUid, TwoFaType};
