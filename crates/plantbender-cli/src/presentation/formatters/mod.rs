pub mod gauge;
pub mod humidity;

pub use gauge::{fill_fraction, gauge_color, text_bar};
pub use humidity::{column_header, headline, unit_of};
