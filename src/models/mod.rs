pub mod auth;
pub mod company;
pub mod service;
pub mod booking;
pub mod admin;

pub use auth::{LoginRequest, Me, RegisterRequest, Role, TokenResponse};
pub use company::{Company, CompanyOffer, CompanyService};
pub use service::Service;
pub use booking::{Booking, BookingCreateRequest, BookingService, StatusTone};
pub use admin::{ActiveUser, User};
