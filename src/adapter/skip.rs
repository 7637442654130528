use crate::cursor::{Cursor, Transfer};
use tracing::trace;

/// 丢弃上游的前`n`个元素。
///
/// 丢弃动作推迟到第一次`is_valid`时执行，之后计数归零，重复探测不会再丢弃。
pub struct Skip<'p, C: ?Sized> {
    parent: &'p mut C,
    count_to_drop: i64,
}

impl<'p, C: Cursor + ?Sized> Skip<'p, C> {
    pub fn new(parent: &'p mut C, count: i64) -> Self {
        Skip { parent, count_to_drop: count }
    }

    fn drop_pending(&mut self) {
        if self.count_to_drop <= 0 {
            return;
        }
        let mut dropped = 0u64;
        while self.count_to_drop > 0 && self.parent.is_valid() {
            self.count_to_drop -= 1;
            self.parent.advance();
            dropped += 1;
        }
        // 上游提前耗尽时剩余的计数也不再需要
        self.count_to_drop = 0;
        trace!(dropped, "dropped leading elements");
    }
}

impl<C: Cursor + ?Sized> Cursor for Skip<'_, C> {
    type Item = C::Item;

    fn advance(&mut self) {
        self.parent.advance();
    }

    fn is_valid(&mut self) -> bool {
        self.drop_pending();
        self.parent.is_valid()
    }

    fn current(&mut self) -> &C::Item {
        self.parent.current()
    }

    fn latched(&self) -> &C::Item {
        self.parent.latched()
    }
}

impl<C: Transfer + ?Sized> Transfer for Skip<'_, C> {
    fn transfer(&mut self) -> C::Item {
        self.parent.transfer()
    }
}
