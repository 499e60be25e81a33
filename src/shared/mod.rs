pub mod clock;
pub mod web;
