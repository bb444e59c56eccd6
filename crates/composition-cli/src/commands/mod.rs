pub mod laziness;
pub mod run;
