//! Search a TV show, pick one of its seasons and browse the season's episodes
//! with their release dates, ratings and plots, as provided by OMDb.

pub mod core;
pub mod gui;
