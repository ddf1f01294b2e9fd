use std::io::{self, Write};

/// Print a label and read one trimmed line. `None` means stdin hit EOF,
/// which callers treat as "leave the current flow".
pub fn read_line(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// s/n confirmation; anything other than `s` is a no.
pub fn confirm(label: &str) -> io::Result<bool> {
    let answer = read_line(label)?.unwrap_or_default();
    Ok(answer.eq_ignore_ascii_case("s"))
}
