use crate::adapter::{Filter, Select, Skip, Take, Until};
use std::ops::ControlFlow;
use tracing::debug;

/// 拉取式游标。
///
/// 游标表示对某个序列的“当前遍历位置”，只借用上游的元素，从不拥有它们。
/// 调用方必须在`is_valid`返回`true`之后才能读取`current`。
///
/// 所有适配器都通过可变借用持有其上游游标，因此上游必须比适配器活得更久，这一点由借用检查保证：
///
/// ```
/// use rlinq::{from, Cursor, Transfer};
///
/// let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
/// let result = from(&source).skip(2).take(8).filter(|x| x % 3 == 0).materialize();
/// assert_eq!(result, vec![3, 6, 9]);
/// ```
pub trait Cursor {
    /// 元素类型
    type Item;

    /// 移动到下一个逻辑位置。已经耗尽的游标上调用时什么也不做。
    fn advance(&mut self);

    /// 当且仅当`current`可以安全调用时返回`true`。
    ///
    /// 过滤类适配器会在这里扫描上游并锁存被接受的元素。
    fn is_valid(&mut self) -> bool;

    /// 读取当前位置的元素，投影适配器会在每次读取时重新计算。
    fn current(&mut self) -> &Self::Item;

    /// 重新读取最近一次`current`（或探测）得到的元素，不触发任何重新计算。
    fn latched(&self) -> &Self::Item;

    /// 最多保留`amount`个元素，非正数表示立即耗尽。
    fn take(&mut self, amount: i64) -> Take<'_, Self>
    where
        Self: Sized,
    {
        Take::new(self, amount)
    }

    /// 丢弃前`count`个元素，非正数表示不丢弃。
    fn skip(&mut self, count: i64) -> Skip<'_, Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// 将每个元素投影为新的值。
    fn select<T, F>(&mut self, func: F) -> Select<'_, Self, F, T>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> T,
    {
        Select::new(self, func)
    }

    /// 只保留满足`predicate`的元素。
    fn filter<P>(&mut self, predicate: P) -> Filter<'_, Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// 只保留不等于`value`的元素。
    fn filter_ne(&mut self, value: Self::Item) -> Filter<'_, Self, impl FnMut(&Self::Item) -> bool>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Filter::new(self, move |item: &Self::Item| *item != value)
    }

    /// 保留首个满足`predicate`的元素之前的所有元素，该元素本身不保留。
    fn until<P>(&mut self, predicate: P) -> Until<'_, Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Until::new(self, predicate)
    }

    /// 保留首个等于`value`的元素之前的所有元素。
    fn until_eq(&mut self, value: Self::Item) -> Until<'_, Self, impl FnMut(&Self::Item) -> bool>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Until::new(self, move |item: &Self::Item| *item == value)
    }
}

/// 能把当前元素交给终端消费者的游标。
///
/// 由游标链自身拥有的元素（投影结果）会被移动出来，借用自外部存储的元素则只能克隆。
pub trait Transfer: Cursor {
    /// 取出当前元素，调用前必须已经确认有效。
    fn transfer(&mut self) -> Self::Item;

    /// 逐个取出元素交给`consumer`，直到游标耗尽或`consumer`返回`Break`。
    ///
    /// 交给`consumer`的元素视为已消费，即使返回`Break`游标也会前进到下一个位置。返回消费的元素个数。
    fn for_each(&mut self, consumer: &mut dyn FnMut(Self::Item) -> ControlFlow<()>) -> usize {
        let mut consumed = 0;
        while self.is_valid() {
            let item = self.transfer();
            self.advance();
            consumed += 1;
            if consumer(item).is_break() {
                break;
            }
        }
        consumed
    }

    /// 拉取整条游标链直到耗尽，按顺序收集所有元素。
    ///
    /// 只有有限的游标链才会返回，无界的链需要调用方先用`take`或`until`约束。
    fn materialize(&mut self) -> Vec<Self::Item> {
        let mut result = Vec::new();
        self.for_each(&mut |item: Self::Item| {
            result.push(item);
            ControlFlow::Continue(())
        });
        debug!(count = result.len(), "materialized cursor chain");
        result
    }

    /// 将元素逐个写入输出游标`target`，每写入一个元素输出位置前进一次。
    ///
    /// 任一侧耗尽即停止，返回写入的元素个数。输出侧先耗尽时，游标停在第一个未写入的元素上。
    fn fill(&mut self, target: &mut dyn Iterator<Item = &mut Self::Item>) -> usize {
        let mut written = 0;
        while self.is_valid() {
            let Some(slot) = target.next() else {
                break;
            };
            *slot = self.transfer();
            self.advance();
            written += 1;
        }
        debug!(written, "copied cursor chain into target");
        written
    }

    /// 同[`Transfer::fill`]，接受任意可变引用的迭代器，例如`slice.iter_mut()`或`&mut [T]`。
    ///
    /// ```
    /// use rlinq::{from, Cursor, Transfer};
    ///
    /// let source = [1, 2, 3, 4, 5];
    /// let mut target = vec![0; 6];
    /// assert_eq!(from(&source).skip(3).copy_into(target[1..].iter_mut()), 2);
    /// assert_eq!(target, vec![0, 4, 5, 0, 0, 0]);
    /// ```
    fn copy_into<'t, I>(&mut self, target: I) -> usize
    where
        Self: Sized,
        Self::Item: 't,
        I: IntoIterator<Item = &'t mut Self::Item>,
    {
        self.fill(&mut target.into_iter())
    }
}
