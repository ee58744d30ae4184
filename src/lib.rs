//! invx: inventory exchange toolkit
//!
//! Moves point-of-sale records (products, sales, purchases, expenses)
//! between typed entities and spreadsheet-friendly CSV, with English or
//! Arabic column headers.

pub mod cli;
pub mod core;
pub mod entities;
pub mod exchange;
