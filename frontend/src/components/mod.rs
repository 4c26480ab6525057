pub mod booking_details_modal;
pub mod calendar_page;
pub mod month_grid;
pub mod waiver_table;
pub mod waivers_page;

pub use booking_details_modal::BookingDetailsModal;
pub use calendar_page::CalendarPage;
pub use month_grid::MonthGrid;
pub use waiver_table::WaiverTable;
pub use waivers_page::WaiversPage;
