pub mod composite;
pub mod filters;
pub mod gloss;
pub mod gradient;
pub mod microphone;
pub mod shapes;
