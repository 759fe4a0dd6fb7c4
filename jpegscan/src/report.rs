use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use super::*;

/// What to show for every marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Show the position of the marker
    pub show_offset: bool,
    /// Show the value of the length field
    pub show_size: bool,
    /// Show offset and size in hex
    pub hex: bool,
    /// Append the long description
    pub describe: bool,
}

impl ReportConfig {
    /// Format a record as `<source>:<name>[:<offset>][:<size>][:<description>]`
    ///
    /// ```
    /// # use jpegscan::report::ReportConfig;
    /// # use jpegscan::Scanner;
    /// let data = [0xFF_u8, 0xD8, 0xFF, 0xFE, 0x00, 0x10];
    /// let mut scanner = Scanner::new(data.as_slice());
    /// scanner.run(&mut std::io::sink()).unwrap();
    /// let config = ReportConfig {
    ///     show_offset: true,
    ///     show_size: true,
    ///     hex: true,
    ///     ..Default::default()
    /// };
    /// let line = config.format_record("a.jpg", &scanner.records()[1]);
    /// assert_eq!(line, "a.jpg:COM:0x2:0x10");
    /// ```
    pub fn format_record(&self, source: &str, record: &MarkerRecord) -> String {
        let mut line = format!("{source}:{}", record.marker().short_name());

        if self.show_offset {
            line.push(':');
            line.push_str(&self.number(record.pos()));
        }

        if self.show_size {
            line.push(':');
            line.push_str(&self.number(record.size().into()));
        }

        if self.describe {
            line.push(':');
            line.push_str(&record.marker().long_description());
        }

        line
    }

    fn number(&self, n: u64) -> String {
        if self.hex {
            format!("{n:#x}")
        } else {
            n.to_string()
        }
    }
}

/// A scan that failed after the file was opened
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    pub source: Error,
}

/// Scan a stream and print its markers
///
/// Scan headers are printed while scanning, the marker lines once the scan
/// is over. The marker lines are printed even if the scan fails.
pub fn report<R: Read, W: Write>(
    source: &str,
    reader: R,
    config: &ReportConfig,
    out: &mut W,
) -> Result<(), Error> {
    let mut scanner = Scanner::new(reader);
    let result = scanner.run(out);

    for record in scanner.records() {
        writeln!(out, "{}", config.format_record(source, record))?;
    }

    result
}

/// Scan files one after another
///
/// Files that cannot be opened are logged and skipped. The first file that
/// fails while scanning ends the run.
pub fn report_paths<P: AsRef<Path>, W: Write>(
    paths: &[P],
    config: &ReportConfig,
    out: &mut W,
) -> Result<(), FileError> {
    for path in paths {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                tracing::error!("{}: {err}", path.display());
                continue;
            }
        };

        tracing::debug!("Scanning '{}'", path.display());

        report(
            &path.display().to_string(),
            BufReader::new(file),
            config,
            out,
        )
        .map_err(|source| FileError {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(hex: &str, config: ReportConfig) -> (Result<(), Error>, String) {
        let data = hex::decode(hex).unwrap();
        let mut out = Vec::new();
        let result = report("t.jpg", data.as_slice(), &config, &mut out);

        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn names_only() {
        let (result, out) = output("FFD8FFDB00040102FFD9", ReportConfig::default());

        result.unwrap();
        assert_eq!(out, "t.jpg:SOI\nt.jpg:DQT\nt.jpg:EOI\n");
    }

    #[test]
    fn decimal() {
        let config = ReportConfig {
            show_offset: true,
            show_size: true,
            ..Default::default()
        };
        let (result, out) = output("FFD8FFDB00040102FFD9", config);

        result.unwrap();
        assert_eq!(out, "t.jpg:SOI:0:0\nt.jpg:DQT:2:4\nt.jpg:EOI:8:0\n");
    }

    #[test]
    fn hex_offset_only() {
        let config = ReportConfig {
            show_offset: true,
            hex: true,
            ..Default::default()
        };
        let (result, out) = output("FFD8FFDB00040102FFD9", config);

        result.unwrap();
        assert_eq!(out, "t.jpg:SOI:0x0\nt.jpg:DQT:0x2\nt.jpg:EOI:0x8\n");
    }

    #[test]
    fn describe() {
        let config = ReportConfig {
            describe: true,
            ..Default::default()
        };
        let (result, out) = output("FFD8FFE000040000FFD9", config);

        result.unwrap();
        assert_eq!(
            out,
            "t.jpg:SOI:Start Of Image.\n\
             t.jpg:APP0:APPlication specific (0).\n\
             t.jpg:EOI:End Of Image.\n"
        );
    }

    #[test]
    fn scan_header_before_markers() {
        let (result, out) = output(
            "FFD8FFDA000A0201000211003F00FFD9",
            ReportConfig::default(),
        );

        result.unwrap();
        assert_eq!(
            out,
            "SOS\tss=0\tse=63\tah=0\tal=0\n  #1 td=0 ta=0\n  #2 td=1 ta=1\n\
             t.jpg:SOI\nt.jpg:SOS\nt.jpg:EOI\n"
        );
    }

    #[test]
    fn flushed_on_failure() {
        let (result, out) = output("FFD8FFC0", ReportConfig::default());

        assert!(matches!(result, Err(Error::TruncatedLength(0xC0))));
        assert_eq!(out, "t.jpg:SOI\n");
    }
}
