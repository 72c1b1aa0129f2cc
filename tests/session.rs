use std::io::{self, Write};

use escpos_serial::{Attribute, Error, Printer, StyleTag, ToggleState};
use pretty_assertions::assert_eq;

const INIT: [u8; 10] = [0x1b, 0x40, 0x1b, 0x37, 0x07, 0x50, 0x02, 0x12, 0x23, 0xff];

/// Records writes, and refuses them while `broken` is set
#[derive(Debug, Default)]
struct FlakySink {
    bytes: Vec<u8>,
    broken: bool
}

impl Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "printer unplugged"));
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn printer() -> Printer<Vec<u8>> {
    Printer::with_defaults(Vec::new()).unwrap()
}

fn after_init(printer: Printer<Vec<u8>>) -> Vec<u8> {
    let bytes = printer.into_sink();
    assert_eq!(&INIT[..], &bytes[..INIT.len()]);
    bytes[INIT.len()..].to_vec()
}

#[test]
fn every_toggle_comes_back_after_two_calls() {
    let toggles: Vec<(Attribute, [u8; 2])> = vec![
        (Attribute::Bold, [0x1b, b'E']),
        (Attribute::FontB, [0x1b, b'!']),
        (Attribute::Underline, [0x1b, b'-']),
        (Attribute::Inverse, [0x1d, b'B']),
        (Attribute::UpsideDown, [0x1b, b'{'])
    ];
    for (attribute, prefix) in toggles {
        let mut printer = printer();
        printer.toggle(attribute).unwrap();
        assert!(printer.state().is_on(attribute));
        printer.toggle(attribute).unwrap();
        assert_eq!(&ToggleState::default(), printer.state());
        assert_eq!(
            vec![prefix[0], prefix[1], 0x01, prefix[0], prefix[1], 0x00],
            after_init(printer)
        );
    }
}

#[test]
fn named_toggles_match_the_generic_one() {
    let mut printer = printer();
    printer.toggle_bold().unwrap();
    printer.toggle_font_b().unwrap();
    printer.toggle_underline().unwrap();
    printer.toggle_inverse().unwrap();
    printer.toggle_upside_down().unwrap();
    let state = *printer.state();
    assert!(state.bold() && state.font_b() && state.underline() && state.inverse() && state.upside_down());
    assert_eq!(
        vec![0x1b, b'E', 1, 0x1b, b'!', 1, 0x1b, b'-', 1, 0x1d, b'B', 1, 0x1b, b'{', 1],
        after_init(printer)
    );
}

#[test]
fn out_of_range_heat_time_writes_nothing() {
    match Printer::create(Vec::new(), 300, 2, 7) {
        Err(Error::InvalidParameter{name, value}) => {
            assert_eq!("heat_time", name);
            assert_eq!("300", value);
        },
        other => panic!("Unexpected result {:?}", other)
    }

    let mut sink = FlakySink::default();
    assert!(Printer::create(&mut sink, 80, 2, 256).is_err());
    assert!(sink.bytes.is_empty());
}

#[test]
fn print_is_verbatim() {
    let mut printer = printer();
    printer.print(&[0x1b, b'E', 0x01]).unwrap();
    printer.print("text").unwrap();
    printer.linefeed().unwrap();
    // Raw escape sequences are not seen by the toggle state
    assert!(!printer.state().bold());
    assert_eq!(b"\x1bE\x01text\n".to_vec(), after_init(printer));
}

#[test]
fn markup_line_with_separator() {
    let mut printer = printer();
    let report = printer.print_markup("bc:HI").unwrap();
    assert_eq!(1, report.printed);
    assert!(report.is_complete());
    assert_eq!(
        vec![0x1b, b'a', 1, 0x1b, b'E', 1, b'H', b'I', 0x1b, b'E', 0],
        after_init(printer)
    );
}

#[test]
fn markup_content_starts_at_the_fourth_character() {
    let mut printer = printer();
    printer.print_markup("bl xHELLO").unwrap();
    assert_eq!(b"\x1ba\x00\x1bE\x01xHELLO\x1bE\x00".to_vec(), after_init(printer));
}

#[test]
fn markup_document() {
    let mut printer = printer();
    let document = "ic:RECEIPT\n l:2 x coffee\nfr:thanks!\n";
    let report = printer.print_markup(document).unwrap();
    assert_eq!(3, report.printed);
    assert_eq!(&ToggleState::default(), printer.state());

    let mut expected = Vec::new();
    expected.extend_from_slice(b"\x1ba\x01\x1dB\x01RECEIPT\n\x1dB\x00");
    expected.extend_from_slice(b"\x1ba\x002 x coffee\n");
    expected.extend_from_slice(b"\x1ba\x02\x1b!\x01thanks!\n\x1b!\x00");
    assert_eq!(expected, after_init(printer));
}

#[test]
fn markup_state_is_shared_with_the_session() {
    let mut printer = printer();
    // Bold left on before the document: every bold line comes out inverted
    printer.toggle_bold().unwrap();
    printer.print_markup("bl:one\nbl:two\n").unwrap();
    assert!(printer.state().bold());
    assert_eq!(
        b"\x1bE\x01\x1ba\x00\x1bE\x00one\n\x1bE\x01\x1ba\x00\x1bE\x00two\n\x1bE\x01".to_vec(),
        after_init(printer)
    );
}

#[test]
fn malformed_lines_are_skipped() {
    let mut printer = printer();
    let report = printer.print_markup("bc\n\nuq:bad justification\nur:ok\n").unwrap();
    assert_eq!(1, report.printed);
    let skipped: Vec<usize> = report.skipped.iter().map(|line| line.line_number).collect();
    assert_eq!(vec![1, 2, 3], skipped);
    assert!(matches!(report.skipped[0].error, Error::MalformedLine(_)));
    assert!(matches!(report.skipped[2].error, Error::InvalidParameter{..}));
    assert_eq!(b"\x1ba\x02\x1b-\x01ok\n\x1b-\x00".to_vec(), after_init(printer));
}

#[test]
fn unknown_style_is_a_no_op() {
    let mut printer = printer();
    printer.style(StyleTag::Unknown(b'x')).unwrap();
    printer.print_markup("xl:plain\n").unwrap();
    assert_eq!(b"\x1ba\x00plain\n".to_vec(), after_init(printer));
}

#[test]
fn failed_toggle_keeps_the_state() {
    let mut printer = Printer::with_defaults(FlakySink::default()).unwrap();
    printer.sink_mut().broken = true;
    assert!(matches!(printer.toggle_bold(), Err(Error::Transport(_))));
    assert!(!printer.state().bold());

    printer.sink_mut().broken = false;
    printer.toggle_bold().unwrap();
    assert!(printer.state().bold());
    assert_eq!(&[0x1b, b'E', 0x01][..], &printer.sink().bytes[INIT.len()..]);
}

#[test]
fn transport_error_stops_the_document() {
    let mut printer = Printer::with_defaults(FlakySink::default()).unwrap();
    printer.sink_mut().broken = true;
    assert!(matches!(printer.print_markup("bl:one\nbl:two\n"), Err(Error::Transport(_))));
    assert_eq!(INIT.len(), printer.sink().bytes.len());
}

#[test]
fn reset_and_clear_recovers_from_desync() {
    let mut printer = printer();
    printer.toggle_underline().unwrap();
    printer.reset().unwrap();
    assert!(printer.state().underline());
    printer.reset_and_clear().unwrap();
    assert!(!printer.state().underline());
}

#[test]
fn broken_sink_fails_creation() {
    let sink = FlakySink{bytes: Vec::new(), broken: true};
    assert!(matches!(Printer::with_defaults(sink), Err(Error::Transport(_))));
}
