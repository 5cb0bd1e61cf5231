pub mod display;
pub mod entities;
pub mod rain;
pub mod scheduler;
pub mod skills;
pub mod starfield;
