pub mod health;
pub mod totals;
