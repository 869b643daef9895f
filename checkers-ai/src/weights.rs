//! 权重矩阵文本格式解析和生成
//!
//! 外部调优产出的权重表是 8x8 浮点矩阵：按行优先排列，
//! 每行一行文本，行内 8 个空白分隔的数字。示例：
//!
//! ```text
//! 0 1 4 9 16 25 36 49
//! 1 2 5 10 17 26 37 50
//! ...
//! ```

use thiserror::Error;

use checkers_core::BOARD_SIZE;

use crate::evaluate::WeightMatrix;

/// 权重表解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightsError {
    /// 行数不对
    #[error("Expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    /// 某行的数字个数不对
    #[error("Row {row} has {actual} values, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// 无法解析的数字
    #[error("Invalid number '{value}' at row {row}")]
    BadNumber { row: usize, value: String },
}

/// 从文本解析权重矩阵（空行被忽略）
pub fn parse_matrix(text: &str) -> Result<WeightMatrix, WeightsError> {
    let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if rows.len() != BOARD_SIZE {
        return Err(WeightsError::RowCount {
            expected: BOARD_SIZE,
            actual: rows.len(),
        });
    }

    let mut matrix = [[0.0; BOARD_SIZE]; BOARD_SIZE];
    for (i, row) in rows.iter().enumerate() {
        let values: Vec<&str> = row.split_whitespace().collect();
        if values.len() != BOARD_SIZE {
            return Err(WeightsError::ColumnCount {
                row: i,
                expected: BOARD_SIZE,
                actual: values.len(),
            });
        }
        for (j, value) in values.iter().enumerate() {
            matrix[i][j] = value.parse().map_err(|_| WeightsError::BadNumber {
                row: i,
                value: value.to_string(),
            })?;
        }
    }
    Ok(matrix)
}

/// 将权重矩阵转换为文本格式
pub fn format_matrix(matrix: &WeightMatrix) -> String {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0 1 4 9 16 25 36 49
1 2 5 10 17 26 37 50
4 5 8 13 20 29 40 53
9 10 13 18 25 34 45 58
16 17 20 25 32 41 52 65
25 26 29 34 41 50 62 74
36 37 40 45 52 62 72 85
49 50 53 58 65 74 85 98";

    #[test]
    fn test_parse_matrix() {
        let matrix = parse_matrix(SAMPLE).unwrap();
        assert_eq!(matrix[0][0], 0.0);
        assert_eq!(matrix[0][7], 49.0);
        assert_eq!(matrix[7][7], 98.0);
        assert_eq!(matrix[4][2], 20.0);
    }

    #[test]
    fn test_parse_ignores_blank_lines() {
        let padded = format!("\n{}\n\n", SAMPLE);
        assert!(parse_matrix(&padded).is_ok());
    }

    #[test]
    fn test_row_count_error() {
        let err = parse_matrix("1 2 3 4 5 6 7 8").unwrap_err();
        assert_eq!(
            err,
            WeightsError::RowCount {
                expected: 8,
                actual: 1
            }
        );
    }

    #[test]
    fn test_column_count_error() {
        let text = "1 2 3\n".repeat(8);
        let err = parse_matrix(&text).unwrap_err();
        assert_eq!(
            err,
            WeightsError::ColumnCount {
                row: 0,
                expected: 8,
                actual: 3
            }
        );
    }

    #[test]
    fn test_bad_number_error() {
        let mut text = SAMPLE.to_string();
        text = text.replace("98", "abc");
        let err = parse_matrix(&text).unwrap_err();
        assert_eq!(
            err,
            WeightsError::BadNumber {
                row: 7,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parsed_matrix_is_white_perspective() {
        // 解析出的矩阵按白方视角读取：白方在 (x, y) 直接取
        // matrix[x][y]，黑方通过中心对称 (7-x, 7-y) 取同一格
        use crate::evaluate::{EvalWeights, Evaluator};
        use checkers_core::{Board, Position, Side};

        let matrix = parse_matrix(SAMPLE).unwrap();
        let evaluator = Evaluator::new(EvalWeights {
            win: matrix,
            lose: matrix,
            own_factor: 1.0,
        });

        // 矩阵在点对称下不对称，方向读反会得到不同分值
        assert_ne!(matrix[1][2], matrix[6][5]);

        let mut board = Board::empty();
        board.set(Position::new_unchecked(1, 2), Some(Side::White));
        assert!((evaluator.score(&board, Side::White) - matrix[1][2]).abs() < 1e-9);

        let mut board = Board::empty();
        board.set(Position::new_unchecked(6, 5), Some(Side::Black));
        assert!((evaluator.score(&board, Side::Black) - matrix[1][2]).abs() < 1e-9);
    }

    #[test]
    fn test_format_round_trip() {
        let matrix = parse_matrix(SAMPLE).unwrap();
        let text = format_matrix(&matrix);
        assert_eq!(parse_matrix(&text).unwrap(), matrix);
    }
}
