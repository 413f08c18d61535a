use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use crate::record::{parse_line, Record};

/// Counts of what the reader did with its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    /// Lines read, including the skipped ones.
    pub lines: usize,
    /// Records handed to the consumer.
    pub records: usize,
    /// Records whose size failed to parse and were sent with a magnitude of zero.
    pub bad_sizes: usize,
    /// Lines dropped because they were blank or lacked the delimiter.
    pub skipped: usize,
}

/// Returns true when stdin is a pipe or a file rather than an interactive terminal.
#[cfg(unix)]
pub fn stdin_is_piped() -> bool {
    // SAFETY: `libc::stat` is plain integer fields, so the all-zero value is valid.
    // fstat only writes into that struct and reports failure through its return
    // value, in which case the struct is never read.
    let is_char_device = unsafe {
        let mut stat: libc::stat = std::mem::zeroed();
        if libc::fstat(libc::STDIN_FILENO, &mut stat) != 0 {
            return false;
        }
        (stat.st_mode & libc::S_IFMT) == libc::S_IFCHR
    };
    !is_char_device
}

#[cfg(not(unix))]
pub fn stdin_is_piped() -> bool {
    use std::io::IsTerminal;
    !io::stdin().is_terminal()
}

/// Reads `reader` line by line and sends every record through `sender`.
///
/// Per-line faults never stop the stream: a size that does not parse is logged and
/// the record is sent with a magnitude of zero, and a line that cannot be split is
/// logged and skipped. A read error is logged and ends the stream like end of input
/// does. Reading also stops once the receiving side is gone.
///
/// The sender is borrowed, so the channel closes when the caller drops it.
pub fn read_records<R: BufRead>(mut reader: R, delimiter: char, sender: &Sender<Record>) -> ReadSummary {
    let mut summary = ReadSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::error!("Error reading input: {}", e);
                break;
            }
        }
        summary.lines += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let line = String::from_utf8_lossy(&buf);

        let record = match parse_line(&line, delimiter) {
            Ok((record, None)) => record,
            Ok((record, Some(e))) => {
                log::warn!("Parse error on line {}: {}", summary.lines, e);
                summary.bad_sizes += 1;
                record
            }
            Err(e) => {
                log::warn!("Skipping line {}: {}", summary.lines, e);
                summary.skipped += 1;
                continue;
            }
        };

        if sender.send(record).is_err() {
            log::debug!("Receiver gone, stopping after line {}", summary.lines);
            break;
        }
        summary.records += 1;
    }

    log::info!(
        "Input finished: {} lines, {} records, {} bad sizes, {} skipped",
        summary.lines,
        summary.records,
        summary.bad_sizes,
        summary.skipped
    );
    summary
}

/// Spawns the producer thread reading records from stdin.
///
/// The channel closes when the thread finishes and drops `sender`.
pub fn spawn_reader(delimiter: char, sender: Sender<Record>) -> io::Result<JoinHandle<ReadSummary>> {
    thread::Builder::new()
        .name("reader".to_string())
        .spawn(move || read_records(io::stdin().lock(), delimiter, &sender))
}
