pub mod cookies;
pub mod policies;
pub mod rights;
pub mod security;
pub mod transparency;
