use std::io::{self, Write};

/// Writes `message` to stdout and mirrors it into `writer` when one is given.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        eprintln!("標準出力への書き込みに失敗しました: {e}");
    }

    mirror(message, writer)
}

/// Writes `message` to stderr and mirrors it into `writer` when one is given.
pub fn eprintln(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    let _ = writeln!(io::stderr(), "{message}");

    mirror(message, writer)
}

fn mirror(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }
    Ok(())
}
