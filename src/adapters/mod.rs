/// Concrete implementations of the outbound ports
pub mod outbound;
