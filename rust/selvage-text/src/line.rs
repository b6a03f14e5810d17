use std::io::BufRead;

use selvage_common::{Result, error::Error, verify_arg};

/// Reads one line from `reader` into `buf`, returning the number of bytes
/// stored.
///
/// Bytes are copied until a `\n` (consumed, never stored), end-of-stream,
/// or a full buffer. A single `\r` immediately preceding the terminator is
/// stripped, so both LF and CR+LF line endings yield the same content.
///
/// `Ok(0)` means "nothing remained before the terminator": a genuinely
/// empty line, a line consisting only of `\r`, and end-of-stream with
/// nothing read are indistinguishable by the return value. Callers that
/// need to detect end-of-stream must track it themselves (for the metadata
/// files this reader ingests, a blank line and end-of-input are treated the
/// same way).
///
/// # Errors
///
/// - `InvalidArgument` if `buf` is empty; nothing is read.
/// - `CapacityExceeded` once the buffer is completely full and no
///   terminator has been seen; the line must be strictly shorter than
///   `buf.len()` before `\r`-stripping. The buffer then holds the first
///   `buf.len()` bytes of the line and the rest of the line remains
///   unconsumed in the stream.
/// - `Io` if the underlying stream fails; interrupted reads are retried.
pub fn read_line<R: BufRead>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    verify_arg!(buf, !buf.is_empty());

    let mut stored = 0;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io("read line", e)),
        };
        if chunk.is_empty() {
            if stored == 0 {
                return Ok(0);
            }
            break;
        }

        let room = buf.len() - stored;
        match chunk.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                if pos >= room {
                    buf[stored..].copy_from_slice(&chunk[..room]);
                    reader.consume(room);
                    return Err(Error::capacity_exceeded("line", buf.len()));
                }
                buf[stored..stored + pos].copy_from_slice(&chunk[..pos]);
                stored += pos;
                reader.consume(pos + 1);
                break;
            }
            None => {
                let n = chunk.len();
                if n >= room {
                    buf[stored..].copy_from_slice(&chunk[..room]);
                    reader.consume(room);
                    return Err(Error::capacity_exceeded("line", buf.len()));
                }
                buf[stored..stored + n].copy_from_slice(chunk);
                stored += n;
                reader.consume(n);
            }
        }
    }

    if stored > 0 && buf[stored - 1] == b'\r' {
        stored -= 1;
    }
    Ok(stored)
}
