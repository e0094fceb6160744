/// Application layer: DTOs and use cases
pub mod dto;
pub mod use_cases;
