use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use vecmat_core::Matrix;

use crate::error::ProjectionError;

/// Separator between the values of one row.
pub const SEPARATOR: &str = ", ";

/// Write a matrix as plain text, one row per line.
///
/// Values are written in row-major order, separated by `", "`, with enough
/// digits to read them back exactly.
///
/// # Arguments
///
/// * `path` - The path of the file to create or truncate.
/// * `matrix` - The matrix to write.
pub fn write_matrix_txt(
    path: impl AsRef<Path>,
    matrix: &Matrix<f64>,
) -> Result<(), ProjectionError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    for row in matrix.row_iter() {
        let line = row
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    log::info!(
        "wrote {}x{} matrix to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(())
}

/// Read a matrix written by [`write_matrix_txt`].
///
/// Blank lines are ignored.
///
/// # Returns
///
/// The matrix, validated like [`Matrix::from_rows`].
pub fn read_matrix_txt(path: impl AsRef<Path>) -> Result<Matrix<f64>, ProjectionError> {
    // open the file and create a buffered reader
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let rows = reader
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .map(|line| -> Result<Vec<f64>, ProjectionError> {
            let line = line.map_err(ProjectionError::from)?;
            parse_row(&line)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Matrix::from_rows(rows)?)
}

fn parse_row(line: &str) -> Result<Vec<f64>, ProjectionError> {
    line.split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<f64>()
                .map_err(|e| ProjectionError::ParseError(format!("{s}: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perspective::projection;
    use std::fs;
    use vecmat_core::{CoreError, ErrorKind};

    #[test]
    fn write_read_matrix_txt() -> Result<(), ProjectionError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("proj");

        let p = projection(1.2, 4.0 / 3.0, 0.25, 50.0)?;
        write_matrix_txt(&file_path, &p)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let back = read_matrix_txt(&file_path)?;
        assert_eq!(back, p);
        Ok(())
    }

    #[test]
    fn write_matrix_txt_layout() -> Result<(), ProjectionError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("m.txt");

        let m = Matrix::from_rows(vec![vec![1.0, -0.5], vec![0.0, 2.25]])?;
        write_matrix_txt(&file_path, &m)?;
        assert_eq!(fs::read_to_string(&file_path)?, "1.0, -0.5\n0.0, 2.25\n");
        Ok(())
    }

    #[test]
    fn read_matrix_txt_errors() -> Result<(), ProjectionError> {
        let tmp_dir = tempfile::tempdir()?;

        let missing = read_matrix_txt(tmp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(missing, ProjectionError::IoError(_)));
        assert_eq!(missing.kind(), ErrorKind::Io);

        let bad = tmp_dir.path().join("bad");
        fs::write(&bad, "1.0, x\n")?;
        let err = read_matrix_txt(&bad).unwrap_err();
        assert!(matches!(err, ProjectionError::ParseError(_)));

        let ragged = tmp_dir.path().join("ragged");
        fs::write(&ragged, "1.0, 2.0\n3.0\n")?;
        let err = read_matrix_txt(&ragged).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::Core(CoreError::RaggedRows { row: 1, .. })
        ));

        let empty = tmp_dir.path().join("empty");
        fs::write(&empty, "\n\n")?;
        let err = read_matrix_txt(&empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
        Ok(())
    }

    #[test]
    fn write_matrix_txt_invalid_path() {
        let m = Matrix::<f64>::identity(2).unwrap();
        let result = write_matrix_txt("/path/to/non/existent/directory/proj", &m);
        assert!(matches!(result, Err(ProjectionError::IoError(_))));
    }
}
