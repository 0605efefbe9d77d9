mod differ;
mod normalizer;

pub use differ::{Differ, NoticeSink};
pub use normalizer::Normalizer;
