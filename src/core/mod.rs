pub mod animator;
pub mod export;
pub mod kinematics;
pub mod report;
pub mod sampler;
pub mod window;
