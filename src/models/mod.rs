pub mod booking;
pub mod shop;

pub use booking::{Booking, BookingRequest, NewBooking};
pub use shop::ShopConfig;
