pub mod bounds;
pub mod error;
pub mod number;
pub mod pool;

pub use bounds::Bounds;
pub use error::ModelError;
pub use number::LottoNumber;
pub use pool::Pool;
