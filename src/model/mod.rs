pub mod assignment;
pub mod labels;
pub mod metrics;
pub mod probs;
