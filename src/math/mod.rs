pub mod sampling;
pub mod utils;

pub use sampling::{
    gaussian_coefficients, sparse_ternary_coefficients, ternary_coefficients,
    uniform_coefficients,
};
pub use utils::{
    center_lift, non_zero_u256, reduce_centered_mod, scale_and_round,
    signed_to_residue_u256, signed_to_residue_u64,
};
