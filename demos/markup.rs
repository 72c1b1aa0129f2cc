use escpos_serial::{Printer, PrinterProfile};

// Usage: cargo run --example markup -- [device]
// Without a device, the bytes go to the standard output.
fn main() {
    env_logger::init();

    let printer_profile = match std::env::args().nth(1) {
        Some(device) => PrinterProfile::serial_builder(device).build(),
        None => PrinterProfile::terminal_builder().build()
    };
    let mut printer = match Printer::new(printer_profile) {
        Ok(printer) => printer,
        Err(e) => panic!("Error: {}", e)
    };
    let document = "bc:ESCPOS-SERIAL\n\
                    \x20c:markup demo\n\
                    ul:underlined on the left\n\
                    ir:inverse on the right\n\
                    fl:small font\n";
    match printer.print_markup(document) {
        Ok(report) => for skipped in report.skipped {
            println!("Line {} skipped: {}", skipped.line_number, skipped.error);
        },
        Err(e) => println!("Error: {}", e)
    }
}
