//! Type parameters in walked fields are bounded; others are left alone.

use std::marker::PhantomData;

use snip64::{Redactor, SnipConfig, Snippable};

struct Tag;

#[derive(Snippable)]
struct Page<T, M> {
    items: Vec<T>,
    cursor: Option<String>,
    #[snip(skip)]
    _meta: PhantomData<M>,
}

fn main() {
    let page: Page<String, Tag> = Page {
        items: vec!["QUJDREVGR0hJSktM".to_string()],
        cursor: None,
        _meta: PhantomData,
    };
    let page = page.snip_with(&Redactor::new(SnipConfig::new(8, 4)));
    assert_eq!(page.items[0], "[base64 payload ~12 bytes | preview: QUJD... ]");
    assert!(page.cursor.is_none());
}
