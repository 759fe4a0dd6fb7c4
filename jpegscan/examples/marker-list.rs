use jpegscan::Scanner;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First agument must be a file path.");
    let data = std::fs::read(path).unwrap();

    if !jpegscan::is_filetype(&data) {
        eprintln!("Data do not start with an SOI marker");
    }

    let mut scanner = Scanner::new(data.as_slice());
    let result = scanner.run(&mut std::io::stdout());

    for record in scanner.records() {
        println!(
            "{:>8x}: {:<5} {}",
            record.pos(),
            record.marker().short_name(),
            record.marker().long_description()
        );
    }

    result.unwrap();
}
