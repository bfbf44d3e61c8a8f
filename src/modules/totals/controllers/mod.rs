pub mod totals_controller;
