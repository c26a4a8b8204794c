pub mod animator;

pub use animator::ChartAnimator;
