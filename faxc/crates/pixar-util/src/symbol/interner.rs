//! String interner backing [`Symbol`].
//!
//! Compilation is single-threaded (see the concurrency model in the top-level
//! spec), so unlike a concurrent compiler's interner this one is a plain
//! `Mutex`-guarded table rather than a lock-free concurrent map — there is
//! never more than one thread driving a `Session` at a time.

use rustc_hash::FxHashMap;
use std::sync::{Mutex, OnceLock};

use super::Symbol;

struct StringTable {
    strings: Vec<&'static str>,
    indices: FxHashMap<&'static str, u32>,
}

impl StringTable {
    fn new() -> Self {
        let mut table = Self {
            strings: Vec::with_capacity(64),
            indices: FxHashMap::default(),
        };
        for &kw in super::KNOWN_SYMBOLS {
            table.intern_new(kw);
        }
        table
    }

    fn intern_new(&mut self, string: &str) -> Symbol {
        if let Some(&index) = self.indices.get(string) {
            return Symbol { index };
        }
        let index = self.strings.len() as u32;
        let leaked: &'static str = Box::leak(string.to_string().into_boxed_str());
        self.strings.push(leaked);
        self.indices.insert(leaked, index);
        Symbol { index }
    }

    fn get(&self, symbol: Symbol) -> &'static str {
        self.strings[symbol.index as usize]
    }
}

fn table() -> &'static Mutex<StringTable> {
    static TABLE: OnceLock<Mutex<StringTable>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(StringTable::new()))
}

pub(super) fn intern(string: &str) -> Symbol {
    table().lock().unwrap().intern_new(string)
}

pub(super) fn resolve(symbol: Symbol) -> &'static str {
    table().lock().unwrap().get(symbol)
}

#[cfg(test)]
mod tests {
    use super::super::Symbol;

    #[test]
    fn interns_same_string_to_same_symbol() {
        let a = Symbol::intern("hello");
        let b = Symbol::intern("hello");
        assert_eq!(a, b);
    }

    #[test]
    fn interns_distinct_strings_to_distinct_symbols() {
        let a = Symbol::intern("hello");
        let b = Symbol::intern("world");
        assert_ne!(a, b);
    }

    #[test]
    fn known_keywords_are_stable() {
        assert_eq!(super::super::KW_LET.as_str(), "let");
        assert_eq!(super::super::KW_FUN.as_str(), "fun");
        assert_eq!(Symbol::intern("let"), super::super::KW_LET);
    }

    #[test]
    fn unicode_roundtrips() {
        let sym = Symbol::intern("名前");
        assert_eq!(sym.as_str(), "名前");
    }
}
