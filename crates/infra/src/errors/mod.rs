//! Conversions from transport and parsing errors into `DomainrError`.

mod conversions;

pub use conversions::InfraError;
