//! Unit, tuple and struct variants all derive.

use snip64::{Redactor, SnipConfig, Snippable};

#[derive(Snippable)]
enum Event {
    Started,
    Chunk(u32, String),
    Finished { digest: String, #[snip(skip)] raw: Vec<u8> },
}

#[derive(Snippable)]
enum Never {}

fn main() {
    let redactor = Redactor::new(SnipConfig::new(8, 4));
    match Event::Chunk(1, "QUJDREVGR0hJSktM".into()).snip_with(&redactor) {
        Event::Chunk(index, body) => {
            assert_eq!(index, 1);
            assert_eq!(body, "[base64 payload ~12 bytes | preview: QUJD... ]");
        }
        _ => unreachable!(),
    }
    assert!(matches!(Event::Started.snip_with(&redactor), Event::Started));
    let _ = Event::Finished { digest: String::new(), raw: Vec::new() };
    let _: Option<Never> = None;
}
