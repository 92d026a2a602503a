use berlin_clock::{convert_time, BerlinClockConverter, ClockError, TimeConverter};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("00:00:00", "Y\nOOOO\nOOOO\nOOOOOOOOOOO\nOOOO" ; "midnight")]
#[test_case("13:17:01", "O\nRROO\nRRRO\nYYROOOOOOOO\nYYOO" ; "afternoon")]
#[test_case("23:59:59", "O\nRRRR\nRRRO\nYYRYYRYYRYY\nYYYY" ; "last second of the day")]
#[test_case("24:00:00", "Y\nRRRR\nRRRR\nOOOOOOOOOOO\nOOOO" ; "end of day")]
#[test_case("24:00", "Y\nRRRR\nRRRR\nOOOOOOOOOOO\nOOOO" ; "end of day short")]
#[test_case("12:56:01", "O\nRROO\nRROO\nYYRYYRYYRYY\nYOOO" ; "noon hour")]
fn test_convert_time(input: &str, expected: &str) {
    assert_eq!(convert_time(input).unwrap(), expected);
}

#[test_case("24:01:00")]
#[test_case("9:00:00")]
#[test_case("12:60:00")]
#[test_case("")]
fn test_convert_time_rejects(input: &str) {
    assert_eq!(convert_time(input), Err(ClockError::InvalidTimeFormat(input.to_string())));
}

#[test]
fn test_every_time_has_five_rows() {
    for hour in 0..24 {
        for minute in 0..60 {
            for second in [0, 1, 30, 59] {
                let input = format!("{:02}:{:02}:{:02}", hour, minute, second);
                let output = convert_time(&input).unwrap();
                let rows: Vec<&str> = output.split('\n').collect();

                let lengths: Vec<usize> = rows.iter().map(|row| row.len()).collect();
                assert_eq!(lengths, vec![1, 4, 4, 11, 4], "{}", input);

                let lit = |row: &str| row.chars().filter(|c| *c != 'O').count() as u32;
                assert_eq!(lit(rows[0]) == 1, second % 2 == 0, "{}", input);
                assert_eq!(lit(rows[1]) * 5 + lit(rows[2]), hour, "{}", input);
                assert_eq!(lit(rows[3]) * 5 + lit(rows[4]), minute, "{}", input);
            }
        }
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let converter = BerlinClockConverter;
    let first = converter.convert_time("07:45:12").unwrap();
    let second = converter.convert_time("07:45:12").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "Y\nROOO\nRROO\nYYRYYRYYROO\nOOOO");
}

#[test]
fn test_conversion_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || convert_time(&format!("1{}:00:00", i)).unwrap()))
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs[0], "Y\nRROO\nOOOO\nOOOOOOOOOOO\nOOOO");
    assert_eq!(outputs[3], "Y\nRROO\nRRRO\nOOOOOOOOOOO\nOOOO");
}
