pub mod handlers;
pub mod responses;

pub use handlers::{handle_find_nearest, handle_register, status_message};
pub use responses::ApiResponse;
