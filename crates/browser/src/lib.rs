pub mod env;
pub mod errors;
pub mod js;
pub mod launch;

pub use env::ChromiumPage;
pub use errors::to_notice_error;
pub use launch::launch;
