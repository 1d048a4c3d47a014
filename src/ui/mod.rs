/// UI module exports
pub mod browser;
pub mod components;
