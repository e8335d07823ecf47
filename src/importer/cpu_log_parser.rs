// ==========================================
// 成衣供应链物料测算 - CPU 日志解析器
// ==========================================
// 格式: pidstat 风格，空白分隔
// - 前 3 行为表头，整体跳过
// - 数据列: Time Period UID PID %usr %system %guest %wait %CPU CPU Command
// - 空行、重复表头行、"Average:" 汇总行忽略
// ==========================================

use crate::domain::cpu_log::CpuSample;
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveTime;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// 表头行数
pub const HEADER_LINES: usize = 3;

/// 数据列数
pub const COLUMN_COUNT: usize = 11;

const TIME_FORMAT: &str = "%I:%M:%S %p";

// ==========================================
// CpuLogParser
// ==========================================
pub struct CpuLogParser;

impl CpuLogParser {
    /// 读取并解析日志文件
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<CpuSample>> {
        let path = file_path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let samples = self.parse_str(&content)?;

        tracing::debug!(path = %path.display(), samples = samples.len(), "cpu log parsed");
        Ok(samples)
    }

    /// 解析日志文本
    ///
    /// # 错误
    /// - 行数不足表头: HeaderMissing
    /// - 列数不足: ColumnCountError
    /// - 数值/时间无法解析: TypeConversionError / TimeFormatError
    /// - 无数据行: EmptyLog
    pub fn parse_str(&self, content: &str) -> ImportResult<Vec<CpuSample>> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() < HEADER_LINES {
            return Err(ImportError::HeaderMissing {
                expected: HEADER_LINES,
                actual: lines.len(),
            });
        }

        let mut samples = Vec::new();
        for (idx, raw) in lines.iter().enumerate().skip(HEADER_LINES) {
            let line_no = idx + 1;
            let fields: Vec<&str> = raw.split_whitespace().collect();

            if is_ignored(&fields) {
                continue;
            }

            samples.push(parse_row(line_no, &fields)?);
        }

        if samples.is_empty() {
            return Err(ImportError::EmptyLog);
        }
        Ok(samples)
    }
}

fn is_ignored(fields: &[&str]) -> bool {
    match fields.first() {
        None => true,
        Some(first) if first.starts_with("Average") || first.starts_with('#') => true,
        // 周期性重复的表头: "hh:mm:ss PM UID PID ..."
        _ => fields.get(2) == Some(&"UID"),
    }
}

fn parse_row(line: usize, fields: &[&str]) -> ImportResult<CpuSample> {
    if fields.len() < COLUMN_COUNT {
        return Err(ImportError::ColumnCountError {
            line,
            expected: COLUMN_COUNT,
            actual: fields.len(),
        });
    }

    let stamp = format!("{} {}", fields[0], fields[1]);
    let time = NaiveTime::parse_from_str(&stamp, TIME_FORMAT)
        .map_err(|_| ImportError::TimeFormatError { line, value: stamp })?;

    Ok(CpuSample {
        time,
        uid: parse_field(line, "UID", fields[2])?,
        pid: parse_field(line, "PID", fields[3])?,
        usr_pct: parse_field(line, "%usr", fields[4])?,
        system_pct: parse_field(line, "%system", fields[5])?,
        guest_pct: parse_field(line, "%guest", fields[6])?,
        wait_pct: parse_field(line, "%wait", fields[7])?,
        cpu_pct: parse_field(line, "%CPU", fields[8])?,
        cpu_core: parse_field(line, "CPU", fields[9])?,
        // 命令行中可能带空格
        command: fields[10..].join(" "),
    })
}

fn parse_field<T: FromStr>(line: usize, field: &str, value: &str) -> ImportResult<T> {
    value
        .parse::<T>()
        .map_err(|_| ImportError::TypeConversionError {
            line,
            field: field.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Linux 5.15.0 (peer0) \t01/15/2024 \t_x86_64_\t(8 CPU)\n\
                          \n\
                          10:15:01 AM   UID       PID    %usr %system  %guest   %wait    %CPU   CPU  Command\n";

    #[test]
    fn test_parse_rows() {
        let content = format!(
            "{}10:15:02 AM  1000      4242    1.00    0.50    0.00    0.00    1.50     3  peer\n\
             10:15:03 AM  1000      4242    0.00    0.00    0.00    0.00    0.00     3  peer\n",
            HEADER
        );
        let samples = CpuLogParser.parse_str(&content).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].time, NaiveTime::from_hms_opt(10, 15, 2).unwrap());
        assert_eq!(samples[0].pid, 4242);
        assert_eq!(samples[0].cpu_pct, 1.5);
        assert_eq!(samples[0].cpu_core, 3);
        assert_eq!(samples[1].command, "peer");
    }

    #[test]
    fn test_pm_conversion() {
        let content = format!(
            "{}01:00:00 PM  0  1  0.0  0.0  0.0  0.0  5.0  0  orderer\n\
             12:30:00 AM  0  1  0.0  0.0  0.0  0.0  5.0  0  orderer\n",
            HEADER
        );
        let samples = CpuLogParser.parse_str(&content).unwrap();
        assert_eq!(samples[0].time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(samples[1].time, NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn test_skips_blank_and_average_lines() {
        let content = format!(
            "{}\n10:15:02 AM  0  1  0.0  0.0  0.0  0.0  2.0  0  peer\n\n\
             Average:     0  1  0.0  0.0  0.0  0.0  2.0  -  peer\n",
            HEADER
        );
        let samples = CpuLogParser.parse_str(&content).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_column_count_error() {
        let content = format!("{}10:15:02 AM  0  1  0.0\n", HEADER);
        match CpuLogParser.parse_str(&content) {
            Err(ImportError::ColumnCountError { line, actual, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_type_conversion_error() {
        let content = format!(
            "{}10:15:02 AM  0  1  0.0  0.0  0.0  0.0  abc  0  peer\n",
            HEADER
        );
        match CpuLogParser.parse_str(&content) {
            Err(ImportError::TypeConversionError { field, value, .. }) => {
                assert_eq!(field, "%CPU");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_time_format_error() {
        let content = format!(
            "{}25:15:02 XX  0  1  0.0  0.0  0.0  0.0  1.0  0  peer\n",
            HEADER
        );
        assert!(matches!(
            CpuLogParser.parse_str(&content),
            Err(ImportError::TimeFormatError { line: 4, .. })
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(matches!(
            CpuLogParser.parse_str(HEADER),
            Err(ImportError::EmptyLog)
        ));
        assert!(matches!(
            CpuLogParser.parse_str("only one line"),
            Err(ImportError::HeaderMissing { actual: 1, .. })
        ));
    }
}
