use strake_demo::write_walkthrough;

fn run() -> String {
    let mut out = Vec::new();
    write_walkthrough(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn transcript_is_exactly_ten_lines_in_order() {
    let expected = "\
1
3
value of arr 0 index element1
value of arr 1 index element8
value of arr 2 index element3
value of arr2 0 index element5
value of arr2 1 index element6
value of arr2 2 index element0
value of arr2 3 index element9
value of arr2 4 index element2
";
    assert_eq!(run(), expected);
}

#[test]
fn consecutive_runs_are_byte_identical() {
    assert_eq!(run(), run());
}

#[test]
fn untouched_index_reports_zero() {
    // arr2[2] is never written; the zero-fill default must show through.
    assert!(run().contains("value of arr2 2 index element0"));
}
