use super::{KeywordFilter, NoKeywords, TableFilter};
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Kw {
    If,
    Else,
}

#[test]
fn table_filter_finds_entries() {
    let f = TableFilter::new(&[("if", Kw::If), ("else", Kw::Else)]);
    assert_eq!(f.check("if"), Some(Kw::If));
    assert_eq!(f.check("else"), Some(Kw::Else));
    assert_eq!(f.check("iff"), None);
    assert_eq!(f.check(""), None);
    assert_eq!(f.len(), 2);
    assert!(!f.is_empty());
}

#[test]
fn insert_overrides() {
    let mut f = TableFilter::new(&[("if", Kw::If)]);
    f.insert("if", Kw::Else);
    assert_eq!(f.check("if"), Some(Kw::Else));
}

#[test]
fn no_keywords_classifies_nothing() {
    let f = NoKeywords;
    assert_eq!(KeywordFilter::<Kw>::check(&f, "if"), None);
}

#[test]
fn filters_are_shareable_across_threads() {
    fn assert_sync<T: Sync>(_t: &T) {}
    let f = TableFilter::new(&[("if", Kw::If)]);
    assert_sync(&f);
    assert_sync(&NoKeywords);
}
