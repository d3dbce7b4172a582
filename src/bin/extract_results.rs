//! Convert a raw genetic-algorithm results log into `genetics_results.csv`.
//!
//! Keeps lines containing `:`, takes character columns 1-3, 5-8 and 10-14
//! (1-based, inclusive) and turns every `:` into `,`.
//!
//! Usage: `extract_results <raw_log> [output_csv]`

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result, bail};

const DEFAULT_OUTPUT: &str = "genetics_results.csv";

/// 1-based inclusive character columns kept from each log line.
const COLUMNS: [RangeInclusive<usize>; 3] = [1..=3, 5..=8, 10..=14];

/// Turn one log line into a CSV row, or `None` if it carries no result.
fn convert_line(line: &str) -> Option<String> {
    if !line.contains(':') {
        return None;
    }
    let row = line
        .chars()
        .enumerate()
        .filter(|(i, _)| COLUMNS.iter().any(|r| r.contains(&(i + 1))))
        .map(|(_, c)| if c == ':' { ',' } else { c })
        .collect();
    Some(row)
}

fn convert<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut rows = 0;
    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", line_no + 1))?;
        if let Some(row) = convert_line(&line) {
            writeln!(output, "{row}").context("writing CSV row")?;
            rows += 1;
        }
    }
    output.flush().context("flushing output")?;
    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input_path) = args.next() else {
        bail!("usage: extract_results <raw_log> [output_csv]");
    };
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let input = File::open(&input_path).with_context(|| format!("opening {input_path}"))?;
    let output =
        File::create(&output_path).with_context(|| format!("creating {output_path}"))?;

    let rows = convert(BufReader::new(input), BufWriter::new(output))?;
    log::info!("Extracted {rows} rows from {input_path}");
    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_without_colon_are_dropped() {
        assert_eq!(convert_line("Starting run with 64 threads"), None);
        assert_eq!(convert_line(""), None);
    }

    #[test]
    fn selected_columns_are_joined_with_commas() {
        // cols: 1-3 "01:", 4 ' ', 5-8 "002:", 9 ' ', 10-14 "123.5", rest dropped
        let line = "01: 002: 123.5 extra";
        assert_eq!(convert_line(line).as_deref(), Some("01,002,123.5"));
    }

    #[test]
    fn short_lines_keep_what_is_there() {
        assert_eq!(convert_line("7:").as_deref(), Some("7,"));
        assert_eq!(convert_line("01: 002: 9").as_deref(), Some("01,002,9"));
    }

    #[test]
    fn converts_whole_log() {
        let raw = "header line\n01: 001: 10.00\n02: 001: 20.00\nnoise\n01: 002: 15.00\n";
        let mut out = Vec::new();
        let rows = convert(raw.as_bytes(), &mut out).unwrap();

        assert_eq!(rows, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "01,001,10.00\n02,001,20.00\n01,002,15.00\n"
        );
    }
}
