pub mod alignment;
pub mod classifier;
pub mod quantifier;
pub mod resolver;
pub mod segmentation;
