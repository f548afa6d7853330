use super::*;

mod samples;
mod render;
