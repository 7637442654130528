use crate::cursor::{Cursor, Transfer};

/// 将上游元素投影为新类型。
///
/// 每次`current`都会重新调用投影函数并覆盖缓存槽，缓存槽只用于提供稳定的返回引用，不做记忆化。
/// `transfer`会移走最近一次读取得到的值；如果当前位置尚未被读取则计算一次。
pub struct Select<'p, C: ?Sized, F, T> {
    parent: &'p mut C,
    func: F,
    slot: Option<T>,
}

impl<'p, C, F, T> Select<'p, C, F, T>
where
    C: Cursor + ?Sized,
    F: FnMut(&C::Item) -> T,
{
    pub fn new(parent: &'p mut C, func: F) -> Self {
        Select { parent, func, slot: None }
    }
}

impl<C, F, T> Cursor for Select<'_, C, F, T>
where
    C: Cursor + ?Sized,
    F: FnMut(&C::Item) -> T,
{
    type Item = T;

    fn advance(&mut self) {
        self.slot = None;
        self.parent.advance();
    }

    fn is_valid(&mut self) -> bool {
        self.parent.is_valid()
    }

    fn current(&mut self) -> &T {
        let value = (self.func)(self.parent.current());
        self.slot.insert(value)
    }

    fn latched(&self) -> &T {
        match &self.slot {
            Some(value) => value,
            None => unreachable!("select cursor re-read before any value was projected"),
        }
    }
}

impl<C, F, T> Transfer for Select<'_, C, F, T>
where
    C: Cursor + ?Sized,
    F: FnMut(&C::Item) -> T,
{
    fn transfer(&mut self) -> T {
        match self.slot.take() {
            Some(value) => value,
            None => (self.func)(self.parent.current()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, Transfer};
    use crate::range::from;
    use std::cell::Cell;

    #[test]
    fn test_select_same_type() {
        let source = [1, 2, 3, 4];
        assert_eq!(from(&source).select(|x| x * x).materialize(), vec![1, 4, 9, 16]);
    }

    #[test]
    fn test_select_another_type() {
        let source = [1, 2, 3, 4];
        assert_eq!(from(&source).select(|x| f64::from(*x) / 2.0).materialize(), vec![0.5, 1.0, 1.5, 2.0]);
        assert_eq!(
            from(&source).select(|x| x.to_string()).materialize(),
            vec!["1".to_string(), "2".to_string(), "3".to_string(), "4".to_string()]
        );
    }

    #[test]
    fn test_select_borrowed_source_is_not_cloned() {
        struct Ticket(u32);
        let source = [Ticket(1), Ticket(2), Ticket(3)];
        assert_eq!(from(&source).select(|t| t.0 * 10).materialize(), vec![10, 20, 30]);
    }

    #[test]
    fn test_recompute_on_every_read() {
        let source = [1, 2];
        let calls = Cell::new(0);
        let mut leaf = from(&source);
        let mut select = leaf.select(|x| {
            calls.set(calls.get() + 1);
            x + 100
        });
        assert!(select.is_valid());
        assert_eq!(calls.get(), 0);
        assert_eq!(*select.current(), 101);
        assert_eq!(*select.current(), 101);
        assert_eq!(calls.get(), 2);
        assert_eq!(*select.latched(), 101);
        assert_eq!(calls.get(), 2);
        // 移走最近一次读取的值，不再重新计算
        assert_eq!(select.transfer(), 101);
        assert_eq!(calls.get(), 2);
        select.advance();
        assert!(select.is_valid());
        assert_eq!(select.transfer(), 102);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_projection_once_per_element_under_filter() {
        let source = [1, 2, 3, 4, 5, 6];
        let calls = Cell::new(0);
        let result = from(&source)
            .select(|x| {
                calls.set(calls.get() + 1);
                x * 3
            })
            .filter(|x| x % 2 == 0)
            .materialize();
        assert_eq!(result, vec![6, 12, 18]);
        assert_eq!(calls.get(), source.len());
    }
}
