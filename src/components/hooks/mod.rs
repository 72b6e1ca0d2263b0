pub mod use_like;
pub mod use_random;
