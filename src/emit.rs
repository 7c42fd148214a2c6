use std::io::{self, Write};

/// Streams match indices to `out`, one line per match: the bare index, or
/// `{prefix}.{index}` when a prefix was supplied (the separator dot exists
/// only together with a prefix). Returns how many lines were written.
///
/// This is the only place the system writes to its output stream; no
/// filtering happens here.
pub fn write_matches<W, I>(mut out: W, prefix: Option<&str>, indices: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = usize>,
{
    let mut count = 0;
    for index in indices {
        match prefix {
            Some(prefix) => writeln!(out, "{prefix}.{index}")?,
            None => writeln!(out, "{index}")?,
        }
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_indices_without_prefix() {
        let mut out = Vec::new();
        let count = write_matches(&mut out, None, [0, 2, 5]).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "0\n2\n5\n");
    }

    #[test]
    fn prefix_is_dot_joined() {
        let mut out = Vec::new();
        write_matches(&mut out, Some("run"), [0, 2]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "run.0\nrun.2\n");
    }

    #[test]
    fn empty_stream_writes_nothing() {
        let mut out = Vec::new();
        let count = write_matches(&mut out, Some("run"), []).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }
}
