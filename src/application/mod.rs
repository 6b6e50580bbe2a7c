pub mod editor;
pub mod error;
pub mod gateways;
pub mod session;
pub mod submit;
pub mod uploads;
