//! The derive expands without any `snip64` items in scope.

#[derive(snip64::Snippable)]
struct Unit;

#[derive(snip64::Snippable)]
struct Wrapper(String, #[snip] Option<Box<Wrapper>>);

fn main() {
    let redactor = snip64::Redactor::new(snip64::SnipConfig::new(8, 4));
    let wrapper = Wrapper(
        "plain".into(),
        Some(Box::new(Wrapper("QUJDREVGR0hJSktM".into(), None))),
    );
    let Wrapper(outer, inner) = snip64::Snippable::snip_with(wrapper, &redactor);
    assert_eq!(outer, "plain");
    let Some(inner) = inner else { panic!("inner wrapper dropped") };
    assert_eq!(inner.0, "[base64 payload ~12 bytes | preview: QUJD... ]");
    let Unit = snip64::Snip::snip(Unit);
}
