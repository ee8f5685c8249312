pub mod header;
pub mod emotion_form;
pub mod error_banner;
pub mod emotion_results;
pub mod emoji_rain;
