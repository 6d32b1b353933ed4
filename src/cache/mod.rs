// 查询结果缓存

mod lookup;

pub use lookup::{CacheStats, LookupCache};
