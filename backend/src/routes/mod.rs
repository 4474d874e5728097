pub mod charts;
pub mod clock;
pub mod dashboard;
pub mod drivers;
pub mod health;
pub mod weather;
