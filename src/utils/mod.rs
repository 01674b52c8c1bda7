pub mod maths_utils;

pub use maths_utils::{pearson_correlation, trailing_mean, trailing_mean_std};
