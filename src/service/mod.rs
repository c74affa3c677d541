pub mod picker;
pub mod reading;
pub mod seeder;

pub use picker::{ReadingPicker, ThreadRngPicker};
pub use reading::draw_reading;
pub use seeder::{SeedSummary, seed};
