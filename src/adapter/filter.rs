use crate::cursor::{Cursor, Transfer};

/// 只保留满足谓词的元素。
///
/// `is_valid`向前扫描直到找到被接受的元素并将其锁存，随后的`current`直接读取锁存的元素，
/// 因此每个被扫描的候选元素在一次探测中只求值一次谓词、只解引用一次上游。
pub struct Filter<'p, C: ?Sized, P> {
    parent: &'p mut C,
    predicate: P,
    latched: bool,
}

impl<'p, C, P> Filter<'p, C, P>
where
    C: Cursor + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(parent: &'p mut C, predicate: P) -> Self {
        Filter { parent, predicate, latched: false }
    }
}

impl<C, P> Cursor for Filter<'_, C, P>
where
    C: Cursor + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) {
        self.latched = false;
        self.parent.advance();
    }

    fn is_valid(&mut self) -> bool {
        while self.parent.is_valid() {
            if (self.predicate)(self.parent.current()) {
                self.latched = true;
                return true;
            }
            self.parent.advance();
        }
        self.latched = false;
        false
    }

    fn current(&mut self) -> &C::Item {
        self.latched()
    }

    fn latched(&self) -> &C::Item {
        if !self.latched {
            unreachable!("filter cursor read before a successful probe");
        }
        self.parent.latched()
    }
}

impl<C, P> Transfer for Filter<'_, C, P>
where
    C: Transfer + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    fn transfer(&mut self) -> C::Item {
        self.parent.transfer()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, Transfer};
    use crate::range::from;
    use std::cell::Cell;

    #[test]
    fn test_filter() {
        let source = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(from(&source).filter(|x| x % 2 == 0).materialize(), vec![2, 4, 6, 8]);
        assert_eq!(from(&source).filter(|x| x % 2 == 2).materialize(), Vec::<i32>::new());
        assert_eq!(from(&source).filter(|_| true).materialize(), source.to_vec());
    }

    #[test]
    fn test_filter_ne() {
        let source = [1, 2, 3, 2, 4, 2, 5, 2, 6, 7, 8];
        assert_eq!(from(&source).filter_ne(2).materialize(), vec![1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            from(&source).filter_ne(2).materialize(),
            from(&source).filter(|x| *x != 2).materialize()
        );
    }

    #[test]
    fn test_predicate_called_once_per_element() {
        let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let calls = Cell::new(0);
        let result = from(&source)
            .filter(|x| {
                calls.set(calls.get() + 1);
                x % 3 == 0
            })
            .materialize();
        assert_eq!(result, vec![3, 6, 9]);
        assert_eq!(calls.get(), source.len());
    }

    #[test]
    fn test_read_after_probe_does_not_reevaluate() {
        let source = [1, 2, 3, 4];
        let calls = Cell::new(0);
        let mut leaf = from(&source);
        let mut filter = leaf.filter(|x| {
            calls.set(calls.get() + 1);
            *x > 2
        });
        assert!(filter.is_valid());
        assert_eq!(calls.get(), 3);
        assert_eq!(*filter.current(), 3);
        assert_eq!(*filter.current(), 3);
        assert_eq!(calls.get(), 3);
        filter.advance();
        assert!(filter.is_valid());
        assert_eq!(*filter.current(), 4);
        assert_eq!(calls.get(), 4);
        filter.advance();
        assert!(!filter.is_valid());
        filter.advance();
        assert!(!filter.is_valid());
    }

    #[test]
    #[should_panic]
    fn test_read_without_probe() {
        let source = [1, 2, 3];
        let mut leaf = from(&source);
        let mut filter = leaf.filter(|_| true);
        filter.current();
    }
}
