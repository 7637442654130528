use crate::cursor::{Cursor, Transfer};

/// 最多保留上游的前`n`个元素。
pub struct Take<'p, C: ?Sized> {
    parent: &'p mut C,
    amount_remaining: i64,
}

impl<'p, C: Cursor + ?Sized> Take<'p, C> {
    pub fn new(parent: &'p mut C, amount: i64) -> Self {
        Take { parent, amount_remaining: amount }
    }
}

impl<C: Cursor + ?Sized> Cursor for Take<'_, C> {
    type Item = C::Item;

    fn advance(&mut self) {
        if self.amount_remaining > 0 {
            self.amount_remaining -= 1;
            self.parent.advance();
        }
    }

    fn is_valid(&mut self) -> bool {
        self.amount_remaining > 0 && self.parent.is_valid()
    }

    fn current(&mut self) -> &C::Item {
        self.parent.current()
    }

    fn latched(&self) -> &C::Item {
        self.parent.latched()
    }
}

impl<C: Transfer + ?Sized> Transfer for Take<'_, C> {
    fn transfer(&mut self) -> C::Item {
        self.parent.transfer()
    }
}
