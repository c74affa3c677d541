pub mod draw_request;
pub mod request_log;

pub use draw_request::DrawPayload;
pub use request_log::log_request;
