use itertools::Itertools;

/// Helper trait which can be used to display states, symbols, words and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that is just
    /// the number and for a symbol it is the symbol itself.
    /// This is mainly used for debugging and logging purposes.
    fn show(&self) -> String;

    /// Show a collection of the thing. For a collection of states this should be {0, 1, 2, ...},
    /// for a collection of symbols (i.e. a word) it should be the concatenation of the symbols.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(Show::show).join(", "))
    }
}

macro_rules! impl_show_for_integers {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_show_for_integers!(u8, u16, u32, u64, usize);

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("\"{}\"", iter.into_iter().collect::<String>())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}
