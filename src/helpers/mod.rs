pub mod harvest;
pub mod weeks;
