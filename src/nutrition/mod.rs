mod model;
mod normalize;

pub use model::{Nutrition, Ration};
pub use normalize::normalize;
