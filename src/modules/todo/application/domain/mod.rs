pub mod entities;
pub mod listing;
pub mod statistics;
pub mod validation;
