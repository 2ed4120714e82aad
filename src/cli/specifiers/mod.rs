mod pool;

pub use pool::PoolSpecifier;
