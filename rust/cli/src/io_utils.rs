//! Input and file helpers shared across CLI commands: blocking line reads
//! for interactive prompts and text loading with automatic `.zst`
//! decompression for hand-history files.

use std::io::BufRead;

/// Reads one line from a buffered reader, blocking until available.
///
/// Used by every interactive prompt. The line is trimmed; `None` means EOF
/// or a read error, which callers treat as the user walking away.
pub fn read_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a text file, decompressing automatically when the path ends in
/// `.zst`. A UTF-8 BOM is stripped if present.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
