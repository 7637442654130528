use crate::cursor::{Cursor, Transfer};

/// 保留首个满足停止谓词的元素之前的前缀，该元素本身不产出。
///
/// 探测时锁存上游当前元素，命中停止谓词后游标保持耗尽，之后的前进不再推动上游。
pub struct Until<'p, C: ?Sized, P> {
    parent: &'p mut C,
    predicate: P,
    latched: bool,
    stopped: bool,
}

impl<'p, C, P> Until<'p, C, P>
where
    C: Cursor + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(parent: &'p mut C, predicate: P) -> Self {
        Until { parent, predicate, latched: false, stopped: false }
    }
}

impl<C, P> Cursor for Until<'_, C, P>
where
    C: Cursor + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) {
        if !self.stopped {
            self.latched = false;
            self.parent.advance();
        }
    }

    fn is_valid(&mut self) -> bool {
        if self.stopped || !self.parent.is_valid() {
            self.latched = false;
            return false;
        }
        if (self.predicate)(self.parent.current()) {
            self.latched = false;
            self.stopped = true;
            return false;
        }
        self.latched = true;
        true
    }

    fn current(&mut self) -> &C::Item {
        self.latched()
    }

    fn latched(&self) -> &C::Item {
        if !self.latched {
            unreachable!("until cursor read before a successful probe");
        }
        self.parent.latched()
    }
}

impl<C, P> Transfer for Until<'_, C, P>
where
    C: Transfer + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    fn transfer(&mut self) -> C::Item {
        self.parent.transfer()
    }
}
