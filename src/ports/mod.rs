/// Port definitions (interfaces) for infrastructure
pub mod outbound;
