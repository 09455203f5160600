pub mod clock;
pub mod mappers;
