pub mod use_calendar;
pub mod use_waivers;

pub use use_calendar::use_calendar;
pub use use_waivers::use_waivers;
