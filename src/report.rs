//! User-facing log sink.

pub fn info(message: &str) {
    println!("{}", message);
}

pub fn ok(message: &str) {
    println!("[ok] {}", message);
}

pub fn success(message: &str) {
    println!("[success] {}", message);
}

pub fn error(message: &str) {
    eprintln!("[error] {}", message);
}
