pub mod ask;
pub mod configure;
pub mod eval;

use anyhow::Result;
use std::io::BufRead;

/// Run `handle` on the query from the command line, or on each stdin line
pub(crate) fn for_each_query<F>(query: Option<String>, mut handle: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    match query {
        Some(query) => handle(&query),
        None => for_each_line(std::io::stdin().lock(), handle),
    }
}

/// Hand each non-blank line to `handle` as soon as it is read
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so one
/// bad line still gets an answer and does not stop the lines after it.
pub(crate) fn for_each_line<R, F>(mut reader: R, mut handle: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str) -> Result<()>,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if !line.trim().is_empty() {
            handle(line)?;
        }
    }
}
