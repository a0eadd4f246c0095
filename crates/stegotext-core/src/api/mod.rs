pub mod embed;
pub mod extract;
pub mod shared;
