pub mod explanation;
pub mod gap;
pub mod gap_report;
pub mod interval;
pub mod reference;
pub mod threshold;
