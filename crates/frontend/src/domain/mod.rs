pub mod orders;
pub mod worklist;
