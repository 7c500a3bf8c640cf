pub mod day_1;
pub mod day_8;
pub mod day_10;
pub mod day_12;
pub mod day_16;
pub mod day_17;
pub mod day_18;
pub mod day_19;
pub mod day_20;
pub mod day_23;
