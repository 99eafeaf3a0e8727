use crate::core::{Cell, Grid};

use super::{Level, LoadError};

struct Section {
    id: Option<i64>,
    rows: Vec<Vec<Cell>>,
}

impl Section {
    /// Blank lines at either edge of a section are padding. Blank lines
    /// between rows stay as zero-length rows.
    fn close_into(mut self, levels: &mut Vec<Level>) {
        let Some(last) = self.rows.iter().rposition(|row| !row.is_empty()) else {
            return;
        };
        self.rows.truncate(last + 1);
        let first = self.rows.iter().position(|row| !row.is_empty()).unwrap_or(0);
        self.rows.drain(..first);

        levels.push(Level {
            id: self.id,
            grid: Grid::new(self.rows),
        });
    }
}

pub(super) fn parse_levels(source: &str) -> Result<Vec<Level>, LoadError> {
    let mut levels = Vec::new();
    let mut section = Section {
        id: None,
        rows: Vec::new(),
    };

    // `lines` strips both "\n" and "\r\n"; everything else on the line is kept.
    for (index, line) in source.lines().enumerate() {
        if let Some(header) = line.strip_prefix(';') {
            let id = header
                .trim()
                .parse::<i64>()
                .map_err(|_| LoadError::InvalidHeader {
                    line: index + 1,
                    text: line.to_string(),
                })?;
            let finished = std::mem::replace(
                &mut section,
                Section {
                    id: Some(id),
                    rows: Vec::new(),
                },
            );
            finished.close_into(&mut levels);
            continue;
        }

        section.rows.push(parse_row(line, index + 1));
    }
    section.close_into(&mut levels);

    Ok(levels)
}

fn parse_row(line: &str, line_number: usize) -> Vec<Cell> {
    line.chars()
        .map(|ch| {
            Cell::from_glyph(ch).unwrap_or_else(|| {
                tracing::warn!(line = line_number, glyph = ?ch, "unknown glyph, treating as empty floor");
                Cell::Empty
            })
        })
        .collect()
}
