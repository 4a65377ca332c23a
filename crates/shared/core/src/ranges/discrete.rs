use chrono::NaiveDate;

/// Key type with a well-defined successor
///
/// Contiguity of discrete ranges is checked with this: the range after
/// `[a, b]` must start exactly at `b.successor()`.
pub trait DiscreteDomain: Ord + Clone {
    /// The next key, or `None` at the top of the domain
    fn successor(&self) -> Option<Self>;
}

impl DiscreteDomain for NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }
}

macro_rules! impl_discrete_for_int {
    ($($t:ty),*) => {
        $(
            impl DiscreteDomain for $t {
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_discrete_for_int!(i32, i64, u32, u64, usize);
