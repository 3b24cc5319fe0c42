mod common;
pub use self::common::{Query, QueryCommon, DEFAULT_LIMIT, DEFAULT_OFFSET};

mod product;
pub use self::product::ProductQuery;
