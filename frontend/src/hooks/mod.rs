pub mod use_count_up;
pub mod use_in_view;
pub mod use_media_query;

pub use use_count_up::use_count_up;
pub use use_in_view::use_in_view;
pub use use_media_query::use_is_mobile;
