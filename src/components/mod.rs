pub mod back_to_top;
pub mod carousel;
pub mod loader;
pub mod navbar;
pub mod reveal;
pub mod theme_toggle;
pub mod video_player;
