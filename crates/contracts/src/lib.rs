pub mod orders;
pub mod rest;
pub mod worklist;
