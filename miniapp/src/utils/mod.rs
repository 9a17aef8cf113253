pub mod avatar;

pub use avatar::{fallback_avatar, is_valid_url, user_avatar};
