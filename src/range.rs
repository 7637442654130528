use crate::cursor::{Cursor, Transfer};
use std::ops::Range;

/// 叶子游标，包装外部拥有的序列中的一段半开区间`[begin, end)`。
///
/// 整个设计中只有它直接读取外部存储。
#[derive(Debug, Clone)]
pub struct RangeCursor<'a, T> {
    source: &'a [T],
    begin: usize,
    end: usize,
}

impl<'a, T> RangeCursor<'a, T> {
    pub fn new(source: &'a [T]) -> Self {
        RangeCursor { source, begin: 0, end: source.len() }
    }

    /// 区间会被收窄到`source`之内，起点大于终点时视为空区间。
    pub fn with_range(source: &'a [T], range: Range<usize>) -> Self {
        let end = range.end.min(source.len());
        let begin = range.start.min(end);
        RangeCursor { source, begin, end }
    }

    /// 剩余元素个数
    pub fn remaining(&self) -> usize {
        self.end - self.begin
    }
}

impl<T> Cursor for RangeCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) {
        if self.begin < self.end {
            self.begin += 1;
        }
    }

    fn is_valid(&mut self) -> bool {
        self.begin != self.end
    }

    fn current(&mut self) -> &T {
        &self.source[self.begin]
    }

    fn latched(&self) -> &T {
        &self.source[self.begin]
    }
}

impl<T: Clone> Transfer for RangeCursor<'_, T> {
    fn transfer(&mut self) -> T {
        // 元素借用自外部存储，无法移动
        self.source[self.begin].clone()
    }
}

/// 从整个切片构造叶子游标。
pub fn from<T>(source: &[T]) -> RangeCursor<'_, T> {
    RangeCursor::new(source)
}

/// 从切片的一段下标区间构造叶子游标。
pub fn from_range<T>(source: &[T], range: Range<usize>) -> RangeCursor<'_, T> {
    RangeCursor::with_range(source, range)
}
