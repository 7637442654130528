//! 包装上游游标的适配器。
//!
//! 每个适配器只持有上游的可变借用，不拥有上游也不拥有元素。

mod filter;
mod select;
mod skip;
mod take;
mod until;

pub use filter::Filter;
pub use select::Select;
pub use skip::Skip;
pub use take::Take;
pub use until::Until;
