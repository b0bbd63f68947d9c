pub mod auth;
pub mod featured;
pub mod feeds;
pub mod moderation;
pub mod submissions;
