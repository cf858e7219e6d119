//! Text analysis module

pub mod skill_matcher;
