mod home;
mod legacy_redirect;
mod post_detail;

pub use home::home_page_handler;
pub use legacy_redirect::{canonical_post_path, legacy_post_redirect_handler};
pub use post_detail::post_detail_handler;
