pub mod genres;
pub mod wallpapers;
