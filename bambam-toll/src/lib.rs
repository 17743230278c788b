pub mod report;
pub mod toll;
