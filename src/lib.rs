pub mod cli;
pub mod compose;
pub mod hsv;
pub mod output;
pub mod threshold;
