pub mod explanations;
pub mod gaps;
pub mod references;
