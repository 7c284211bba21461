//! Domain entities

pub mod verification_record;

pub use verification_record::{
    VerificationRecord, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS,
};
