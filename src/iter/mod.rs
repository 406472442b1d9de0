mod owned_iter;
mod pre_order;
mod ref_iter;

pub use owned_iter::*;
pub use pre_order::*;
pub use ref_iter::*;
