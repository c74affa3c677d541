pub mod cards;
pub mod readings;

pub use cards::cards_handler;
pub use readings::results_handler;
