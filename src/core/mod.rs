pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod del;
pub mod explain;
pub mod list;
pub mod log;
pub mod logic;
pub mod reference_check;
pub mod report;
