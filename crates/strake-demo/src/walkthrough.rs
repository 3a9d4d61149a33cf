//! The walkthrough routine: a fixed script over two sequences.

use std::io::{self, Write};
use strake_seq::FixedSeq;

/// Run the walkthrough, writing its transcript to `out`.
///
/// The script is fixed and fully deterministic — consecutive runs produce
/// byte-identical output:
///
/// 1. Build `arr = [1, 2, 3]` and print `arr[0]` and `arr[2]` as bare lines.
/// 2. Overwrite `arr[1]` with 8.
/// 3. Build `arr2` as five zeros, then set indices 1, 0, 4, 3 to 6, 5, 2, 9.
///    Index 2 is never written and stays 0.
/// 4. Counted loop over `arr`, printing one line per index with the value
///    as it stands after the overwrite.
/// 5. Element-wise loop over `arr2` with a separate counter for the position
///    label, printing one line per element.
///
/// All indices in the script are in bounds, so indexing never panics; only
/// the writer can fail.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// strake_demo::write_walkthrough(&mut out).unwrap();
/// let transcript = String::from_utf8(out).unwrap();
/// assert!(transcript.starts_with("1\n3\n"));
/// assert_eq!(transcript.lines().count(), 10);
/// ```
pub fn write_walkthrough<W: Write>(out: &mut W) -> io::Result<()> {
    let mut arr = FixedSeq::from_slice(&[1, 2, 3]);

    writeln!(out, "{}", arr[0])?;
    writeln!(out, "{}", arr[2])?;

    arr[1] = 8;

    // Length known, values not: start from all zeros and fill selectively.
    let mut arr2 = FixedSeq::zeroed(5);
    arr2[1] = 6;
    arr2[0] = 5;
    arr2[4] = 2;
    arr2[3] = 9;

    for i in 0..arr.len() {
        writeln!(out, "value of arr {} index element{}", i, arr[i])?;
    }

    // The position label is a counter maintained beside the loop, not the
    // iterator's own bookkeeping.
    let mut position = 0;
    for value in &arr2 {
        writeln!(out, "value of arr2 {position} index element{value}")?;
        position += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strake_seq::FixedSeq;

    /// Rebuild the sequences exactly as the walkthrough does and check the
    /// states the transcript is derived from.
    #[test]
    fn final_sequence_states() {
        let mut arr = FixedSeq::from_slice(&[1, 2, 3]);
        arr[1] = 8;
        assert_eq!(arr.as_slice(), &[1, 8, 3]);

        let mut arr2 = FixedSeq::zeroed(5);
        arr2[1] = 6;
        arr2[0] = 5;
        arr2[4] = 2;
        arr2[3] = 9;
        assert_eq!(arr2.as_slice(), &[5, 6, 0, 9, 2]);
    }

    #[test]
    fn bare_value_lines_come_first() {
        let mut out = Vec::new();
        write_walkthrough(&mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        let mut lines = transcript.lines();
        assert_eq!(lines.next(), Some("1"));
        assert_eq!(lines.next(), Some("3"));
    }

    #[test]
    fn counted_loop_reports_post_mutation_value() {
        let mut out = Vec::new();
        write_walkthrough(&mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        // Index 1 was overwritten before the loop runs.
        assert!(transcript.contains("value of arr 1 index element8"));
        assert!(!transcript.contains("value of arr 1 index element2"));
    }
}
