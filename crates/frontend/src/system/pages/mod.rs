pub mod session_expired;
