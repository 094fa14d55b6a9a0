pub mod globe_view;
pub mod map_view;
pub mod popup;
